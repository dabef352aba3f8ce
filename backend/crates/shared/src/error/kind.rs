//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

use serde::Serialize;

/// エラー分類
///
/// 各機能クレートのエラーは最終的にこの分類へ落とし込まれ、
/// HTTP ステータスコードとして応答に現れます。
///
/// ## Notes
/// * `non_exhaustive` - 分類は今後追加される可能性があります
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::Conflict;
/// assert_eq!(kind.status_code(), 409);
/// assert_eq!(kind.as_str(), "Conflict");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - Bad Request: リクエストの形式が不正
    BadRequest,
    /// 401 - Unauthorized: 認証情報が無い、または無効
    Unauthorized,
    /// 403 - Forbidden: 認証済みだが対象へのアクセス権が無い
    Forbidden,
    /// 404 - Not Found: 対象のリソースが存在しない
    NotFound,
    /// 408 - Request Timeout: リクエストが時間内に完了しなかった
    RequestTimeout,
    /// 409 - Conflict: 既存の状態と衝突（id や username の重複など）
    Conflict,
    /// 422 - Unprocessable Entity: 形式は正しいが内容が検証を通らない
    UnprocessableEntity,
    /// 500 - Internal Server Error: サーバー内部の想定外エラー
    InternalServerError,
    /// 503 - Service Unavailable: 依存サービス（DB など）が利用不可
    ServiceUnavailable,
}

impl ErrorKind {
    /// 対応する HTTP ステータスコード
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
    /// assert_eq!(ErrorKind::Forbidden.status_code(), 403);
    /// ```
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::RequestTimeout => 408,
            ErrorKind::Conflict => 409,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::InternalServerError => 500,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// HTTP の標準的な理由フレーズ
    ///
    /// RFC 7807 レスポンスの `title` フィールドにそのまま使われます。
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::RequestTimeout => "Request Timeout",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// サーバー側（5xx）のエラーかどうか
    ///
    /// 5xx はエラーレベルでログに残す対象です。
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// クライアント側（4xx）のエラーかどうか
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let table = [
            (ErrorKind::BadRequest, 400),
            (ErrorKind::Unauthorized, 401),
            (ErrorKind::Forbidden, 403),
            (ErrorKind::NotFound, 404),
            (ErrorKind::RequestTimeout, 408),
            (ErrorKind::Conflict, 409),
            (ErrorKind::UnprocessableEntity, 422),
            (ErrorKind::InternalServerError, 500),
            (ErrorKind::ServiceUnavailable, 503),
        ];
        for (kind, code) in table {
            assert_eq!(kind.status_code(), code, "wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(ErrorKind::Conflict.to_string(), "Conflict");
        assert_eq!(
            ErrorKind::UnprocessableEntity.to_string(),
            "Unprocessable Entity"
        );
    }

    #[test]
    fn test_server_and_client_split() {
        assert!(ErrorKind::InternalServerError.is_server_error());
        assert!(ErrorKind::ServiceUnavailable.is_server_error());
        assert!(!ErrorKind::Unauthorized.is_server_error());

        assert!(ErrorKind::Unauthorized.is_client_error());
        assert!(ErrorKind::Conflict.is_client_error());
        assert!(!ErrorKind::InternalServerError.is_client_error());
    }

    #[test]
    fn test_serialize_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorKind::UnprocessableEntity).unwrap();
        assert_eq!(json, r#""UNPROCESSABLE_ENTITY""#);
    }
}
