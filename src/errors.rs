use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ScalesError {
    #[error("collapse length must be positive, got {0} m")]
    InvalidLength(f64),

    #[error("Hubble constant must be a positive finite number of km/s/Mpc, got {0}")]
    InvalidHubbleConstant(f64),
}

pub type ScalesResult<T> = Result<T, ScalesError>;
