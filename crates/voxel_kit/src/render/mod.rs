//! Host renderer boundary
//!
//! The toolkit never draws. Everything visual crosses the [`RenderBackend`]
//! adapter trait, implemented by the embedder on top of the host engine's
//! node types.

mod backend;

pub use backend::{
    BackendResult, NullRenderBackend, RenderBackend, RenderError, SurfaceHandle, VoxelHandle,
};
