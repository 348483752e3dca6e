/// Fatal renderer construction errors.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("graphics surface unavailable: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter found")]
    NoAdapter,
    #[error("GPU device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("shader compile/link failed: {0}")]
    Shader(String),
}
