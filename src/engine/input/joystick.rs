// Joystick binding tokens
//
// Joystick bindings are persisted as short text tokens:
//
//   JoyB3     button 3
//   JoyX+     X axis, positive direction
//   JoyPovY-  POV hat Y axis, negative direction
//
// Letters are case-insensitive, the sign is literal and the whole string must
// match. Anything else parses to `JoystickInput::Invalid`.

use std::fmt;

/// Physical joystick axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoystickAxis {
    X,
    Y,
    Z,
    R,
    U,
    V,
    PovX,
    PovY,
}

impl JoystickAxis {
    /// Whether this axis belongs to the POV hat
    pub fn is_pov(self) -> bool {
        matches!(self, JoystickAxis::PovX | JoystickAxis::PovY)
    }

    /// Axis letter as written in a token (without the `Pov` prefix)
    fn letter(self) -> char {
        match self {
            JoystickAxis::X | JoystickAxis::PovX => 'X',
            JoystickAxis::Y | JoystickAxis::PovY => 'Y',
            JoystickAxis::Z => 'Z',
            JoystickAxis::R => 'R',
            JoystickAxis::U => 'U',
            JoystickAxis::V => 'V',
        }
    }

    fn linear_from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'X' => Some(JoystickAxis::X),
            'Y' => Some(JoystickAxis::Y),
            'Z' => Some(JoystickAxis::Z),
            'R' => Some(JoystickAxis::R),
            'U' => Some(JoystickAxis::U),
            'V' => Some(JoystickAxis::V),
            _ => None,
        }
    }

    fn pov_from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'X' => Some(JoystickAxis::PovX),
            'Y' => Some(JoystickAxis::PovY),
            _ => None,
        }
    }
}

/// Sign of the raw axis value a binding reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisDirection {
    Positive,
    Negative,
}

impl AxisDirection {
    pub fn opposite(self) -> Self {
        match self {
            AxisDirection::Positive => AxisDirection::Negative,
            AxisDirection::Negative => AxisDirection::Positive,
        }
    }

    /// Direction of a raw axis value, `None` inside the deadzone
    pub fn of_value(value: f32, deadzone: f32) -> Option<Self> {
        if value > deadzone {
            Some(AxisDirection::Positive)
        } else if value < -deadzone {
            Some(AxisDirection::Negative)
        } else {
            None
        }
    }
}

/// Direction selected by a `+` on a POV hat axis.
///
/// Linear axes always read `+` as [`AxisDirection::Positive`]. The gamepad
/// backend reports d-pad up and right as positive values, so the hat uses the
/// same convention.
pub const POV_PLUS: AxisDirection = AxisDirection::Positive;

/// Kind tag of a parsed token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Invalid,
    Button,
    Axis,
}

/// A joystick input parsed from its text form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JoystickInput {
    #[default]
    Invalid,
    Button(u32),
    Axis {
        axis: JoystickAxis,
        direction: AxisDirection,
    },
}

impl JoystickInput {
    /// Parse a token such as `JoyB3`, `JoyX+` or `JoyPovY-`.
    ///
    /// Never fails: malformed text yields [`JoystickInput::Invalid`].
    pub fn parse(text: &str) -> Self {
        Self::try_parse(text).unwrap_or(JoystickInput::Invalid)
    }

    fn try_parse(text: &str) -> Option<Self> {
        let body = strip_prefix_ignore_case(text, "Joy")?;

        if let Some(digits) = strip_prefix_ignore_case(body, "B") {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            return digits.parse().ok().map(JoystickInput::Button);
        }

        if let Some(rest) = strip_prefix_ignore_case(body, "Pov") {
            let (letter, plus) = split_axis(rest)?;
            let axis = JoystickAxis::pov_from_letter(letter)?;
            let direction = if plus { POV_PLUS } else { POV_PLUS.opposite() };
            return Some(JoystickInput::Axis { axis, direction });
        }

        let (letter, plus) = split_axis(body)?;
        let axis = JoystickAxis::linear_from_letter(letter)?;
        let direction = if plus {
            AxisDirection::Positive
        } else {
            AxisDirection::Negative
        };
        Some(JoystickInput::Axis { axis, direction })
    }

    pub fn kind(&self) -> InputKind {
        match self {
            JoystickInput::Invalid => InputKind::Invalid,
            JoystickInput::Button(_) => InputKind::Button,
            JoystickInput::Axis { .. } => InputKind::Axis,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, JoystickInput::Invalid)
    }

    pub fn button_number(&self) -> Option<u32> {
        match self {
            JoystickInput::Button(number) => Some(*number),
            _ => None,
        }
    }

    pub fn axis(&self) -> Option<JoystickAxis> {
        match self {
            JoystickInput::Axis { axis, .. } => Some(*axis),
            _ => None,
        }
    }

    pub fn direction(&self) -> Option<AxisDirection> {
        match self {
            JoystickInput::Axis { direction, .. } => Some(*direction),
            _ => None,
        }
    }
}

impl fmt::Display for JoystickInput {
    /// Writes the token form; `Invalid` writes nothing
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JoystickInput::Invalid => Ok(()),
            JoystickInput::Button(number) => write!(f, "JoyB{}", number),
            JoystickInput::Axis { axis, direction } => {
                let plus = if axis.is_pov() {
                    *direction == POV_PLUS
                } else {
                    *direction == AxisDirection::Positive
                };
                let sign = if plus { '+' } else { '-' };
                let pov = if axis.is_pov() { "Pov" } else { "" };
                write!(f, "Joy{}{}{}", pov, axis.letter(), sign)
            }
        }
    }
}

/// Strip an ASCII prefix, ignoring case
fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&text[prefix.len()..])
    } else {
        None
    }
}

/// Split `"X+"` into the axis letter and whether the sign is `+`.
/// The string must be exactly one letter followed by one sign.
fn split_axis(text: &str) -> Option<(char, bool)> {
    let mut chars = text.chars();
    let letter = chars.next()?;
    let plus = match chars.next()? {
        '+' => true,
        '-' => false,
        _ => return None,
    };
    if chars.next().is_some() {
        return None;
    }
    Some((letter, plus))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_button() {
        let input = JoystickInput::parse("JoyB3");
        assert_eq!(input.kind(), InputKind::Button);
        assert_eq!(input.button_number(), Some(3));
        assert_eq!(input.axis(), None);
    }

    #[test]
    fn test_parse_button_multi_digit() {
        assert_eq!(JoystickInput::parse("JoyB12"), JoystickInput::Button(12));
        assert_eq!(JoystickInput::parse("JoyB007"), JoystickInput::Button(7));
    }

    #[test]
    fn test_parse_axis() {
        let input = JoystickInput::parse("JoyX+");
        assert_eq!(input.kind(), InputKind::Axis);
        assert_eq!(input.axis(), Some(JoystickAxis::X));
        assert_eq!(input.direction(), Some(AxisDirection::Positive));

        let input = JoystickInput::parse("JoyV-");
        assert_eq!(input.axis(), Some(JoystickAxis::V));
        assert_eq!(input.direction(), Some(AxisDirection::Negative));
    }

    #[test]
    fn test_parse_pov() {
        let input = JoystickInput::parse("JoyPovY-");
        assert_eq!(input.kind(), InputKind::Axis);
        assert_eq!(input.axis(), Some(JoystickAxis::PovY));
        assert_eq!(input.direction(), Some(POV_PLUS.opposite()));

        let input = JoystickInput::parse("JoyPovX+");
        assert_eq!(input.axis(), Some(JoystickAxis::PovX));
        assert_eq!(input.direction(), Some(POV_PLUS));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(JoystickInput::parse("joyb3"), JoystickInput::Button(3));
        assert_eq!(
            JoystickInput::parse("JOYPOVX+"),
            JoystickInput::parse("JoyPovX+")
        );
        assert_eq!(JoystickInput::parse("joyr-"), JoystickInput::parse("JoyR-"));
    }

    #[test]
    fn test_parse_invalid() {
        for text in [
            "",
            "Joy",
            "JoyZ",
            "X+",
            "random text",
            "JoyB",
            "JoyBx",
            "JoyB3x",
            "JoyB-3",
            "JoyW+",
            "JoyPovZ+",
            "JoyPov+",
            "JoyX+ ",
            " JoyX+",
            "JoyX+-",
            "JoyX*",
            "JoyB99999999999",
            "Jo",
            "Joyé+",
        ] {
            assert_eq!(
                JoystickInput::parse(text).kind(),
                InputKind::Invalid,
                "{:?} should not parse",
                text
            );
        }
    }

    #[test]
    fn test_invalid_has_no_fields() {
        let input = JoystickInput::parse("nope");
        assert!(!input.is_valid());
        assert_eq!(input.button_number(), None);
        assert_eq!(input.axis(), None);
        assert_eq!(input.direction(), None);
        assert_eq!(input, JoystickInput::default());
    }

    #[test]
    fn test_display() {
        assert_eq!(JoystickInput::Button(3).to_string(), "JoyB3");
        assert_eq!(
            JoystickInput::Axis {
                axis: JoystickAxis::U,
                direction: AxisDirection::Negative
            }
            .to_string(),
            "JoyU-"
        );
        assert_eq!(JoystickInput::parse("joypovy+").to_string(), "JoyPovY+");
        assert_eq!(JoystickInput::Invalid.to_string(), "");
    }

    #[test]
    fn test_reparse_is_identity() {
        let tokens = [
            "JoyB0", "JoyB31", "JoyX+", "JoyX-", "JoyY+", "JoyY-", "JoyZ+", "JoyR-", "JoyU+",
            "JoyV-", "JoyPovX+", "JoyPovX-", "JoyPovY+", "JoyPovY-",
        ];
        for token in tokens {
            let parsed = JoystickInput::parse(token);
            assert!(parsed.is_valid(), "{}", token);
            assert_eq!(parsed.to_string(), token);
            assert_eq!(JoystickInput::parse(&parsed.to_string()), parsed);
        }
    }

    #[test]
    fn test_direction_of_value() {
        assert_eq!(
            AxisDirection::of_value(0.8, 0.2),
            Some(AxisDirection::Positive)
        );
        assert_eq!(
            AxisDirection::of_value(-0.5, 0.2),
            Some(AxisDirection::Negative)
        );
        assert_eq!(AxisDirection::of_value(0.1, 0.2), None);
        assert_eq!(AxisDirection::of_value(-0.2, 0.2), None);
    }
}
