use crate::errors::Id3Error;

// Validation
pub fn validate_positive_usize_parameter(value: usize, parameter: &str) -> Result<(), Id3Error> {
    validate_usize_parameter(value, 1, usize::MAX, parameter)
}

pub fn validate_usize_parameter(value: usize, min: usize, max: usize, parameter: &str) -> Result<(), Id3Error> {
    if value < min || max < value {
        let ex_msg = if max == usize::MAX {
            format!("a value of at least {}", min)
        } else {
            format!("a value within range {} and {}", min, max)
        };
        Err(Id3Error::InvalidParameter(parameter.to_string(), ex_msg, value.to_string()))
    } else {
        Ok(())
    }
}
