//! Per-module unit tests mirroring the `src` tree

mod spatial;
