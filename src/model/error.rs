use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MahjonggError {
    /// 牌コードのパースエラー
    InvalidTileCode { code: String },
    /// 面子(TileSet)の構成エラー (枚数,色,連続性)
    InvalidTileGroup { message: String },
    /// 未登録のテンプレートID
    TemplateNotFound { id: String },
}

impl MahjonggError {
    pub fn invalid_code(code: &str) -> Self {
        MahjonggError::InvalidTileCode {
            code: code.to_string(),
        }
    }

    pub fn invalid_group<T: fmt::Display>(message: T) -> Self {
        MahjonggError::InvalidTileGroup {
            message: message.to_string(),
        }
    }
}

impl fmt::Display for MahjonggError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MahjonggError::InvalidTileCode { code } => {
                write!(f, "Invalid tile code: '{}'", code)
            }
            MahjonggError::InvalidTileGroup { message } => {
                write!(f, "Invalid tile group: {}", message)
            }
            MahjonggError::TemplateNotFound { id } => {
                write!(f, "Template not found: '{}'", id)
            }
        }
    }
}

impl std::error::Error for MahjonggError {}

pub type MahjonggResult<T> = Result<T, MahjonggError>;
