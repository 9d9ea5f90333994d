/// Registration payload as accepted by the repository.
///
/// Carries the plaintext password; the repository hashes it as the
/// pre-persistence step so no code path can store it as-is.
#[derive(Debug, Clone)]
pub struct RegisterAdvisorDto {
    pub name: String,
    pub email: String,
    pub password: String,
}
