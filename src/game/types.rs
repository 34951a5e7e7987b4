use serde::{Deserialize, Serialize};

/// What a player action cost. Only a turn-taking action lets monsters act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    TookTurn,
    DidntTakeTurn,
    Exit,
}

/// Developer commands typed at the debug prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebugCommand {
    RevealMap,
    UnrevealMap,
    Heal,
    GrantXp,
    AdjustEnergy(i32),
    Fireball,
}

impl DebugCommand {
    /// Parses prompt text such as `"reveal map"` or `"adjust energy 50"`.
    pub fn parse(text: &str) -> Option<DebugCommand> {
        let text = text.trim().to_ascii_lowercase();
        match text.as_str() {
            "reveal map" => return Some(DebugCommand::RevealMap),
            "unreveal map" => return Some(DebugCommand::UnrevealMap),
            "heal" => return Some(DebugCommand::Heal),
            "xp" => return Some(DebugCommand::GrantXp),
            "fireball" => return Some(DebugCommand::Fireball),
            _ => {}
        }
        let amount = text.strip_prefix("adjust energy")?.trim().parse().ok()?;
        Some(DebugCommand::AdjustEnergy(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_debug_commands() {
        assert_eq!(DebugCommand::parse("reveal map"), Some(DebugCommand::RevealMap));
        assert_eq!(DebugCommand::parse(" XP "), Some(DebugCommand::GrantXp));
        assert_eq!(
            DebugCommand::parse("adjust energy -20"),
            Some(DebugCommand::AdjustEnergy(-20))
        );
        assert_eq!(DebugCommand::parse("adjust energy"), None);
        assert_eq!(DebugCommand::parse("teleport"), None);
    }
}
