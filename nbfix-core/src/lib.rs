//! Core library for the nbfix tools
//!
//!     This crate holds everything the `fix-notebook-widgets` and `check-deploy-env` binaries
//!     need, minus the shell. It never prints, never reads the terminal and never exits the
//!     process: callers get a `Result` and decide what to do with it.
//!
//!     The file structure:
//!     .
//!     ├── error.rs        # NotebookError and PromptError
//!     ├── document.rs     # NotebookDocument and its serializer options
//!     ├── normalize.rs    # the widgets/state normalizer
//!     ├── loader.rs       # reading and overwriting notebook files
//!     ├── deploy_env.rs   # deployment settings resolution and masking
//!     └── lib.rs
//!
//! Document Model
//!
//!     A notebook is plain JSON. We keep it as a `serde_json::Value` (with `preserve_order`
//!     so keys come back out in the order they went in) and only ever touch the nodes the
//!     normalizer cares about. There is no typed notebook schema on purpose: anything we do
//!     not understand is passed through untouched.
//!
//! Testing
//!
//!     tests
//!     ├── normalize_properties.rs     # proptest: idempotence and the widgets invariant
//!     └── notebook_files.rs           # tempfile round trips through the loader
pub mod deploy_env;
pub mod document;
pub mod error;
pub mod loader;
pub mod normalize;

pub use document::{NotebookDocument, WriteOptions};
pub use error::{NotebookError, PromptError};
pub use loader::{fix_notebook, NotebookFile};
pub use normalize::{normalize_widgets, NormalizeStats, WidgetsNormalizer};
