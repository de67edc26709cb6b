use drill_core::model::{GameConfig, Operation, OperationChoice, TargetNumber, TimeLimit};

use crate::views::ViewError;

/// Route segment for an operation choice.
#[must_use]
pub fn encode_operation(choice: OperationChoice) -> &'static str {
    match choice {
        OperationChoice::Fixed(Operation::Addition) => "add",
        OperationChoice::Fixed(Operation::Subtraction) => "sub",
        OperationChoice::Fixed(Operation::Multiplication) => "mul",
        OperationChoice::Fixed(Operation::Division) => "div",
        OperationChoice::Mixed => "all",
    }
}

/// Route segment for a target number.
#[must_use]
pub fn encode_target(target: Option<TargetNumber>) -> String {
    target.map_or_else(|| "all".to_string(), |target| target.get().to_string())
}

/// Rebuild a `GameConfig` from route segments. The menu only emits values
/// from the closed sets, so anything else is a malformed address.
///
/// # Errors
///
/// Returns `ViewError::InvalidConfig` for any segment outside the
/// enumerated configuration surface.
pub fn decode_config(operation: &str, target: &str, seconds: u32) -> Result<GameConfig, ViewError> {
    let operation = match operation {
        "add" => OperationChoice::Fixed(Operation::Addition),
        "sub" => OperationChoice::Fixed(Operation::Subtraction),
        "mul" => OperationChoice::Fixed(Operation::Multiplication),
        "div" => OperationChoice::Fixed(Operation::Division),
        "all" => OperationChoice::Mixed,
        _ => return Err(ViewError::InvalidConfig),
    };

    let target = match target {
        "all" => None,
        raw => {
            let value: u8 = raw.parse().map_err(|_| ViewError::InvalidConfig)?;
            Some(TargetNumber::new(value).map_err(|_| ViewError::InvalidConfig)?)
        }
    };

    let time_limit = TimeLimit::from_seconds(seconds).ok_or(ViewError::InvalidConfig)?;

    Ok(GameConfig::new(operation, target, time_limit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_roundtrips_through_route_segments() {
        let config = GameConfig::new(
            OperationChoice::Fixed(Operation::Division),
            Some(TargetNumber::new(9).unwrap()),
            TimeLimit::Five,
        );
        let decoded = decode_config(
            encode_operation(config.operation),
            &encode_target(config.target),
            config.time_limit.seconds(),
        )
        .unwrap();
        assert_eq!(decoded, config);
    }

    #[test]
    fn mixed_and_untargeted_roundtrip() {
        let decoded = decode_config("all", "all", 10).unwrap();
        assert_eq!(decoded.operation, OperationChoice::Mixed);
        assert_eq!(decoded.target, None);
        assert_eq!(decoded.time_limit, TimeLimit::Ten);
    }

    #[test]
    fn out_of_set_segments_are_rejected() {
        assert!(decode_config("mod", "all", 10).is_err());
        assert!(decode_config("add", "11", 10).is_err());
        assert!(decode_config("add", "zero", 10).is_err());
        assert!(decode_config("add", "all", 7).is_err());
    }
}
