/// A validator comparing an original text with a proposed rewrite.
///
/// Implementations must be total: any pair of strings, including empty or
/// adversarial ones, yields a result.
pub trait IPairValidator: Send + Sync {
    type Output;

    fn validate(&self, original: &str, proposed: &str) -> Self::Output;

    /// Human-readable validator name.
    fn name(&self) -> &str;
}
