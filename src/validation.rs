//! Client-side form validation. Advisory only; the API re-validates.

const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordStrength {
    pub length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl PasswordStrength {
    pub fn is_strong(self) -> bool {
        self.length && self.lowercase && self.uppercase && self.digit && self.special
    }
}

pub fn password_strength(password: &str) -> PasswordStrength {
    PasswordStrength {
        length: password.chars().count() >= 12,
        lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
        uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
        digit: password.chars().any(|c| c.is_ascii_digit()),
        special: password.chars().any(|c| SPECIAL_CHARS.contains(c)),
    }
}

/// All the reasons the change-password form cannot be submitted yet.
/// `first_time` is the forced flow, where no old password exists to ask for.
pub fn validate_change_password(
    first_time: bool,
    old_password: &str,
    new_password: &str,
    confirm_password: &str,
) -> Vec<String> {
    let mut errors = Vec::new();

    if !first_time && old_password.is_empty() {
        errors.push("L'ancien mot de passe est requis".to_string());
    }

    if new_password.is_empty() {
        errors.push("Le nouveau mot de passe est requis".to_string());
    } else if new_password.chars().count() < 12 {
        errors.push("Le mot de passe doit contenir au moins 12 caractères".to_string());
    } else if !password_strength(new_password).is_strong() {
        errors.push(
            "Le mot de passe doit contenir au moins une majuscule, une minuscule, \
             un chiffre et un caractère spécial"
                .to_string(),
        );
    }

    if new_password != confirm_password {
        errors.push("Les mots de passe ne correspondent pas".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_rules_are_independent() {
        let s = password_strength("abc");
        assert!(!s.length && s.lowercase && !s.uppercase && !s.digit && !s.special);

        let s = password_strength("Tr0p-Costaud-123!");
        assert!(s.is_strong());

        // 12 chars but missing a special character.
        assert!(!password_strength("Abcdefgh1234").is_strong());
    }

    #[test]
    fn old_password_required_only_in_regular_flow() {
        let errors = validate_change_password(false, "", "Tr0p-Costaud-123!", "Tr0p-Costaud-123!");
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("ancien"));

        let errors = validate_change_password(true, "", "Tr0p-Costaud-123!", "Tr0p-Costaud-123!");
        assert!(errors.is_empty());
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let errors = validate_change_password(true, "", "Tr0p-Costaud-123!", "autre");
        assert!(errors.iter().any(|e| e.contains("ne correspondent pas")));
    }

    #[test]
    fn weak_password_is_rejected() {
        let errors = validate_change_password(true, "", "court", "court");
        assert!(errors.iter().any(|e| e.contains("12 caractères")));

        let errors = validate_change_password(true, "", "", "");
        assert!(errors.iter().any(|e| e.contains("requis")));
    }
}
