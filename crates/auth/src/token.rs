//! Token-Dienst: signierte, zeitlich begrenzte Bearer-Tokens
//!
//! Tokens sind selbsttragende JWTs (HS256) mit Subjekt (Email), Rolle,
//! Ausstellungs- und Ablaufzeitpunkt. Sie werden serverseitig nicht
//! gespeichert und nicht vorzeitig widerrufen: ein ausgestelltes Token
//! bleibt bis zu seinem natuerlichen Ablauf gueltig. Das Signier-
//! Geheimnis wird beim Start injiziert und innerhalb der Prozess-
//! Lebensdauer nie rotiert.

use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use leitstelle_core::Rolle;

use crate::error::{AuthError, TokenFehler};

/// Standard-Token-Lebensdauer in Minuten
pub const STANDARD_TTL_MINUTEN: i64 = 30;

/// Die im Token kodierten Claims
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subjekt: Email des Benutzers
    pub sub: String,
    /// Rolle zum Zeitpunkt der Ausstellung
    pub role: Rolle,
    /// Ausgestellt am (Unix-Sekunden)
    pub iat: i64,
    /// Laeuft ab am (Unix-Sekunden)
    pub exp: i64,
}

/// Dienst zum Ausstellen und Pruefen von Bearer-Tokens
///
/// Wird einmal beim Start mit dem Signier-Geheimnis und der TTL
/// konstruiert und danach nur noch gelesen; parallele Nutzung aus
/// beliebig vielen Request-Handlern ist unbedenklich.
pub struct TokenDienst {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenDienst {
    /// Erstellt einen neuen Token-Dienst
    pub fn neu(geheimnis: &str, ttl_minuten: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Ablauf wird in `pruefen` selbst geprueft: exklusive Grenze
        // (jetzt >= exp gilt als abgelaufen), kein Kulanzfenster.
        validation.validate_exp = false;
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(geheimnis.as_bytes()),
            decoding_key: DecodingKey::from_secret(geheimnis.as_bytes()),
            validation,
            ttl: Duration::minutes(ttl_minuten),
        }
    }

    /// Stellt ein Token mit der Standard-TTL aus
    pub fn ausstellen(&self, email: &str, rolle: Rolle) -> Result<String, AuthError> {
        self.ausstellen_mit_ttl(email, rolle, self.ttl)
    }

    /// Stellt ein Token mit expliziter TTL aus
    pub fn ausstellen_mit_ttl(
        &self,
        email: &str,
        rolle: Rolle,
        ttl: Duration,
    ) -> Result<String, AuthError> {
        let jetzt = Utc::now();
        let claims = TokenClaims {
            sub: email.to_string(),
            role: rolle,
            iat: jetzt.timestamp(),
            exp: (jetzt + ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenErstellung(e.to_string()))
    }

    /// Prueft ein Token und gibt die kodierten Claims zurueck
    ///
    /// Die Rolle kommt so zurueck wie sie bei der Ausstellung kodiert
    /// wurde; eine spaetere Rollenaenderung wirkt erst, wenn das Token
    /// ablaeuft und neu angemeldet wird. Der Credential-Store wird hier
    /// nicht konsultiert.
    pub fn pruefen(&self, token: &str) -> Result<TokenClaims, TokenFehler> {
        let daten = decode::<TokenClaims>(token, &self.decoding_key, &self.validation).map_err(
            |e| match e.kind() {
                ErrorKind::InvalidSignature => TokenFehler::SignaturUngueltig,
                ErrorKind::ExpiredSignature => TokenFehler::Abgelaufen,
                _ => TokenFehler::Unlesbar,
            },
        )?;

        if Utc::now().timestamp() >= daten.claims.exp {
            return Err(TokenFehler::Abgelaufen);
        }

        Ok(daten.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dienst() -> TokenDienst {
        TokenDienst::neu("test-geheimnis", STANDARD_TTL_MINUTEN)
    }

    #[test]
    fn ausstellen_und_pruefen() {
        let dienst = dienst();
        let token = dienst
            .ausstellen("teste@exemplo.com", Rolle::Koordinator)
            .expect("Ausstellung fehlgeschlagen");

        let claims = dienst.pruefen(&token).expect("Pruefung fehlgeschlagen");
        assert_eq!(claims.sub, "teste@exemplo.com");
        assert_eq!(claims.role, Rolle::Koordinator);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn ttl_null_ist_sofort_abgelaufen() {
        let dienst = dienst();
        let token = dienst
            .ausstellen_mit_ttl("teste@exemplo.com", Rolle::Mitglied, Duration::zero())
            .unwrap();

        // exp == iat: die exklusive Grenze schlaegt sofort zu
        assert_eq!(dienst.pruefen(&token), Err(TokenFehler::Abgelaufen));
    }

    #[test]
    fn abgelaufenes_token_wird_abgelehnt() {
        let dienst = dienst();
        let token = dienst
            .ausstellen_mit_ttl("teste@exemplo.com", Rolle::Mitglied, Duration::minutes(-5))
            .unwrap();

        assert_eq!(dienst.pruefen(&token), Err(TokenFehler::Abgelaufen));
    }

    #[test]
    fn manipulierte_signatur_wird_erkannt() {
        let dienst = dienst();
        let token = dienst
            .ausstellen("teste@exemplo.com", Rolle::Koordinator)
            .unwrap();

        // Erstes Zeichen des Signatur-Teils austauschen
        let (rest, signatur) = token.rsplit_once('.').unwrap();
        let erster = signatur.chars().next().unwrap();
        let ersatz = if erster == 'A' { 'B' } else { 'A' };
        let manipuliert = format!("{rest}.{ersatz}{}", &signatur[1..]);

        assert_eq!(
            dienst.pruefen(&manipuliert),
            Err(TokenFehler::SignaturUngueltig)
        );
    }

    #[test]
    fn falsches_geheimnis_wird_erkannt() {
        let dienst_a = TokenDienst::neu("geheimnis-a", STANDARD_TTL_MINUTEN);
        let dienst_b = TokenDienst::neu("geheimnis-b", STANDARD_TTL_MINUTEN);

        let token = dienst_a
            .ausstellen("teste@exemplo.com", Rolle::Koordinator)
            .unwrap();
        assert_eq!(dienst_b.pruefen(&token), Err(TokenFehler::SignaturUngueltig));
    }

    #[test]
    fn unlesbares_token_wird_abgelehnt() {
        let dienst = dienst();
        assert_eq!(dienst.pruefen("kein-token"), Err(TokenFehler::Unlesbar));
        assert_eq!(
            dienst.pruefen("nicht.ein.token"),
            Err(TokenFehler::Unlesbar)
        );
        assert_eq!(dienst.pruefen(""), Err(TokenFehler::Unlesbar));
    }
}
