//! Coarse intent routing.
//!
//! Runs on every request before any retrieval or generation work, so it is
//! a plain keyword scan: cheap, deterministic, total.

/// The coarse intents the chat pipeline distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Anything about a specific order (status, tracking, PED- codes).
    Order,
    /// Support policies: refunds, delays, cancellation.
    Policy,
    /// Account/user lookups.
    User,
    /// Everything else, answered from the FAQ corpus.
    Informational,
}

const ORDER_KEYWORDS: &[&str] = &["ped-", "pedido", "status"];
const POLICY_KEYWORDS: &[&str] = &["política", "politica", "reembolso", "atraso"];
const USER_KEYWORDS: &[&str] = &["user", "usr-", "cliente"];

/// Classify a message. Case-insensitive substring matching in fixed
/// priority order: order keywords first, then policy, then user; no match
/// means informational.
pub fn detect_intent(message: &str) -> Intent {
    let text = message.to_lowercase();
    if ORDER_KEYWORDS.iter().any(|k| text.contains(k)) {
        return Intent::Order;
    }
    if POLICY_KEYWORDS.iter().any(|k| text.contains(k)) {
        return Intent::Policy;
    }
    if USER_KEYWORDS.iter().any(|k| text.contains(k)) {
        return Intent::User;
    }
    Intent::Informational
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_keywords() {
        assert_eq!(detect_intent("Meu pedido atrasou"), Intent::Order);
        assert_eq!(detect_intent("qual o STATUS da entrega"), Intent::Order);
        assert_eq!(detect_intent("PED-123 por favor"), Intent::Order);
    }

    #[test]
    fn test_policy_keywords() {
        assert_eq!(detect_intent("como funciona o reembolso?"), Intent::Policy);
        assert_eq!(detect_intent("qual a política de atraso"), Intent::Policy);
        assert_eq!(detect_intent("politica de cancelamento"), Intent::Policy);
    }

    #[test]
    fn test_user_keywords() {
        assert_eq!(detect_intent("dados do cliente"), Intent::User);
        assert_eq!(detect_intent("USR-001"), Intent::User);
    }

    #[test]
    fn test_priority_order_wins() {
        // "pedido" (order) outranks "reembolso" (policy)
        assert_eq!(
            detect_intent("quero reembolso do meu pedido"),
            Intent::Order
        );
        // "atraso" (policy) outranks "cliente" (user)
        assert_eq!(detect_intent("cliente reclamou do atraso"), Intent::Policy);
    }

    #[test]
    fn test_default_is_informational() {
        assert_eq!(
            detect_intent("Quais formas de pagamento são aceitas?"),
            Intent::Informational
        );
        assert_eq!(detect_intent(""), Intent::Informational);
    }
}
