//! Viewers for the artifacts of the MLP bowl-classifier experiment.
//!
//! The training process leaves three CSV files in its working directory:
//! a 3×N point table (`x_train.csv`), a label table (`y_train.csv`) and a
//! per-epoch training log (`training_log.csv`). The binaries in this crate
//! load those files and show them: `trainviz-scatter` renders the labeled
//! points against the reference bowl surface in 3D, `trainviz-curves`
//! renders the loss and accuracy curves side by side.

pub mod app;
pub mod color;
pub mod data;
pub mod error;
pub mod surface;
pub mod ui;
