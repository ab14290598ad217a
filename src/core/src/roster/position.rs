use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PlayerPosition {
    GK,
    CD,
    WB,
    IM,
    WI,
    FW,
}

impl PlayerPosition {
    pub const ALL: [PlayerPosition; 6] = [
        PlayerPosition::GK,
        PlayerPosition::CD,
        PlayerPosition::WB,
        PlayerPosition::IM,
        PlayerPosition::WI,
        PlayerPosition::FW,
    ];

    pub fn full_name(&self) -> &'static str {
        match self {
            PlayerPosition::GK => "Goalkeeper",
            PlayerPosition::CD => "Central Defender",
            PlayerPosition::WB => "Wing Back",
            PlayerPosition::IM => "Inner Midfielder",
            PlayerPosition::WI => "Winger",
            PlayerPosition::FW => "Forward",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, PlayerPosition::GK)
    }

    pub fn is_defender(&self) -> bool {
        matches!(self, PlayerPosition::CD | PlayerPosition::WB)
    }

    pub fn is_midfielder(&self) -> bool {
        matches!(self, PlayerPosition::IM | PlayerPosition::WI)
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, PlayerPosition::FW)
    }
}

impl FromStr for PlayerPosition {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "GK" => Ok(PlayerPosition::GK),
            "CD" => Ok(PlayerPosition::CD),
            "WB" => Ok(PlayerPosition::WB),
            "IM" => Ok(PlayerPosition::IM),
            "WI" => Ok(PlayerPosition::WI),
            "FW" => Ok(PlayerPosition::FW),
            other => Err(format!("unknown position '{}'", other)),
        }
    }
}

impl Display for PlayerPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let code = match self {
            PlayerPosition::GK => "GK",
            PlayerPosition::CD => "CD",
            PlayerPosition::WB => "WB",
            PlayerPosition::IM => "IM",
            PlayerPosition::WI => "WI",
            PlayerPosition::FW => "FW",
        };

        write!(f, "{}", code)
    }
}
