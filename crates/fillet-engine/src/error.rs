use thiserror::Error;

/// Errors raised while configuring shapes and materials.
///
/// Nothing in the per-sample path returns an error; every failure here is a
/// configuration-time failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    #[error("unknown program `{0}`")]
    UnknownProgram(String),

    #[error("texture data is {actual} bytes, expected {expected}")]
    TextureSize { expected: usize, actual: usize },

    #[error("output of {width}x{height} pixels exceeds {limit} pixels per side")]
    OutputTooLarge { width: f64, height: f64, limit: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Accepts finite and infinite non-negative radii; rejects negatives and NaN.
pub(crate) fn check_radius(radius: f32) -> Result<f32> {
    if radius >= 0.0 {
        Ok(radius)
    } else {
        Err(Error::InvalidParameter { name: "radius", value: radius })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_radius_is_rejected() {
        assert_eq!(
            check_radius(-1.0),
            Err(Error::InvalidParameter { name: "radius", value: -1.0 })
        );
    }

    #[test]
    fn nan_radius_is_rejected() {
        assert!(matches!(check_radius(f32::NAN), Err(Error::InvalidParameter { .. })));
    }

    #[test]
    fn zero_radius_is_accepted() {
        assert_eq!(check_radius(0.0), Ok(0.0));
    }

    #[test]
    fn display_names_the_parameter() {
        let e = Error::InvalidParameter { name: "radius", value: -2.5 };
        assert_eq!(e.to_string(), "invalid parameter `radius`: -2.5");
    }
}
