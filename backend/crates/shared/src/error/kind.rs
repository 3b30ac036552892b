//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps each pipeline stage to a process exit code.

use serde::Serialize;

/// エラー種別の列挙体
///
/// パイプラインのどのステージで失敗したかを分類します。
/// 各バリアントは固有のプロセス終了コードにマッピングされます。
///
/// ## Notes
/// * `non_exhaustive` - 将来的に列挙子が追加される可能性があることを示す
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Signing;
/// assert_eq!(kind.exit_code(), 5);
/// assert_eq!(kind.as_str(), "signing");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 1 - Internal: 想定外の内部エラー
    Internal,
    /// 2 - Configuration: 設定値が不正
    Configuration,
    /// 3 - Search: PoW 探索が中断/上限到達
    Search,
    /// 4 - KeyGeneration: 鍵ペア生成に失敗
    KeyGeneration,
    /// 5 - Signing: 署名に失敗
    Signing,
    /// 6 - Verification: 検証に失敗（公開鍵不正または署名不一致）
    Verification,
}

impl ErrorKind {
    /// プロセス終了コードを取得
    ///
    /// ## Returns
    /// ステージごとに異なる 0 以外の終了コード
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Configuration.exit_code(), 2);
    /// assert_eq!(ErrorKind::Verification.exit_code(), 6);
    /// ```
    #[inline]
    pub const fn exit_code(&self) -> u8 {
        match self {
            ErrorKind::Internal => 1,
            ErrorKind::Configuration => 2,
            ErrorKind::Search => 3,
            ErrorKind::KeyGeneration => 4,
            ErrorKind::Signing => 5,
            ErrorKind::Verification => 6,
        }
    }

    /// ステージ名の文字列表現を取得
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::KeyGeneration.as_str(), "keygen");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Internal => "internal",
            ErrorKind::Configuration => "configuration",
            ErrorKind::Search => "search",
            ErrorKind::KeyGeneration => "keygen",
            ErrorKind::Signing => "signing",
            ErrorKind::Verification => "verification",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
