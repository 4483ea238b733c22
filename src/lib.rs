//! ATG Log Colorizer - real-time color annotation of application server logs
//!
//! Reads JBoss, WebLogic, WebSphere, DAS or plain log4j output line by line
//! and prints each line in a color chosen by its semantic category.
//!
//! # Architecture
//!
//! - **classifier**: the line classification engine (history window,
//!   multi-line detectors, ordered rule table, known-message tables)
//! - **render**: category palette and colored terminal writer
//! - **pipeline**: the read / classify / emit loop
//! - **config**: layered file and environment configuration
//!
//! # Example
//!
//! ```
//! use atg_log_colorizer::{pipeline, ColorWriter, LineClassifier, Palette};
//!
//! let log = "10:00:00,000 INFO  [org.jboss.system.server.Server] Starting JBoss\n";
//! let mut writer = ColorWriter::new(Vec::new(), Palette::default(), false);
//! let mut classifier = LineClassifier::new();
//!
//! let stats = pipeline::run(log.as_bytes(), &mut writer, &mut classifier)?;
//! assert_eq!(stats.lines, 1);
//! # Ok::<(), atg_log_colorizer::ColorizerError>(())
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod render;

// Re-export commonly used types
pub use classifier::{Category, DetectorState, History, LineClassifier, ServerType};
pub use crate::config::{ColorMode, ColorizerConfig};
pub use error::{ColorizerError, Result};
pub use pipeline::RunStats;
pub use render::{ColorWriter, Palette};
