// src/error.rs

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FigureError {
    #[error("invalid parameter `{name}`: {value} (must be finite and greater than zero)")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("head_height_ratio {head} must exceed torso_height_ratio {torso}")]
    HeadBelowTorso { head: f32, torso: f32 },

    #[error("shape drawn before the canvas dimensions were set")]
    CanvasNotConfigured,
}

impl FigureError {
    pub(crate) fn check_positive(name: &'static str, value: f32) -> Result<(), FigureError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(FigureError::InvalidParameter { name, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_display_names_the_field() {
        let e = FigureError::InvalidParameter { name: "arm_length", value: -1.0 };
        assert!(e.to_string().contains("arm_length"));
        assert!(e.to_string().contains("-1"));
    }

    #[test]
    fn head_below_torso_display_names_both_ratios() {
        let e = FigureError::HeadBelowTorso { head: 0.4, torso: 0.6 };
        assert_eq!(e.to_string(), "head_height_ratio 0.4 must exceed torso_height_ratio 0.6");
        assert!(!e.to_string().contains("greater than zero"));
    }

    #[test]
    fn check_positive_rejects_zero_and_nan() {
        assert!(FigureError::check_positive("w", 1.0).is_ok());
        assert!(FigureError::check_positive("w", 0.0).is_err());
        assert!(FigureError::check_positive("w", f32::NAN).is_err());
        assert!(FigureError::check_positive("w", f32::INFINITY).is_err());
    }
}
