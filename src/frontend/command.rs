use anyhow::bail;

use crate::chess::core::Square;

/// A single line of the text protocol.
#[derive(Debug, PartialEq, Eq)]
pub(super) enum Command {
    Hover(Square),
    Click(Square),
    Display,
    State,
    Rays(Square),
    Pieces,
    /// Either `startpos` or a piece placement.
    SetPosition(String),
    Version,
    Quit,
    Unknown(String),
}

fn parse_square(parts: &[&str]) -> anyhow::Result<Square> {
    match parts {
        [_, square] => Square::try_from(*square),
        [command] => bail!("{command} expects a square"),
        _ => bail!("expected a single square, got \"{}\"", parts[1..].join(" ")),
    }
}

fn parse_setposition(parts: &[&str]) -> anyhow::Result<Command> {
    match parts {
        [_, position] => Ok(Command::SetPosition((*position).to_string())),
        _ => bail!("expected `position [startpos | <placement>]`, got \"{}\"", parts.join(" ")),
    }
}

impl Command {
    pub(super) fn parse(input: &str) -> anyhow::Result<Self> {
        let parts: Vec<&str> = input.split_whitespace().collect();

        if parts.is_empty() {
            return Ok(Self::Unknown(input.to_string()));
        }

        Ok(match parts[0] {
            "hover" => Self::Hover(parse_square(&parts)?),
            "click" => Self::Click(parse_square(&parts)?),
            "d" | "board" => Self::Display,
            "state" => Self::State,
            "rays" => Self::Rays(parse_square(&parts)?),
            "pieces" => Self::Pieces,
            "position" => parse_setposition(&parts)?,
            "version" => Self::Version,
            "quit" => Self::Quit,
            _ => Self::Unknown(input.trim().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_events() {
        assert_eq!(
            Command::parse("hover e2").unwrap(),
            Command::Hover(Square::new(4, 6))
        );
        assert_eq!(
            Command::parse("click 0,7").unwrap(),
            Command::Click(Square::new(0, 7))
        );
        assert_eq!(
            Command::parse("  rays   h8 ").unwrap(),
            Command::Rays(Square::new(7, 0))
        );
    }

    #[test]
    fn parse_malformed_events() {
        assert_eq!(
            Command::parse("click").unwrap_err().to_string(),
            "click expects a square"
        );
        assert_eq!(
            Command::parse("hover e2 e4").unwrap_err().to_string(),
            "expected a single square, got \"e2 e4\""
        );
        assert!(Command::parse("click z9").is_err());
    }

    #[test]
    fn parse_position() {
        assert_eq!(
            Command::parse("position startpos").unwrap(),
            Command::SetPosition("startpos".to_string())
        );
        assert_eq!(
            Command::parse("position 4k3/8/8/8/8/8/8/4K3").unwrap(),
            Command::SetPosition("4k3/8/8/8/8/8/8/4K3".to_string())
        );
        assert!(Command::parse("position").is_err());
    }

    #[test]
    fn parse_simple() {
        assert_eq!(Command::parse("d").unwrap(), Command::Display);
        assert_eq!(Command::parse("board").unwrap(), Command::Display);
        assert_eq!(Command::parse("state").unwrap(), Command::State);
        assert_eq!(Command::parse("pieces").unwrap(), Command::Pieces);
        assert_eq!(Command::parse("version").unwrap(), Command::Version);
        assert_eq!(Command::parse("quit\n").unwrap(), Command::Quit);
    }

    #[test]
    fn unknown() {
        assert_eq!(
            Command::parse("castle kingside\n").unwrap(),
            Command::Unknown("castle kingside".to_string())
        );
    }
}
