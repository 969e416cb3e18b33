use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    /// A computed step would land outside the area.  This signals a defect in
    /// the speed/target/boundary logic — the movement controller is built so
    /// this cannot happen — and is therefore surfaced, never clamped.
    #[error("step would land out of bounds at ({x:.2}, {y:.2})")]
    OutOfBounds { x: f32, y: f32 },
}

pub type AgentResult<T> = Result<T, AgentError>;
