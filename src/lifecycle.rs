//! Application/Interview lifecycle view-model.
//!
//! Status state machines plus the single status-to-label/class mapping every
//! view consumes. Client-side gating is advisory only; the server re-validates
//! every transition.

use crate::models::{ApplicationStatus, InterviewStatus, InterviewType};

impl ApplicationStatus {
    /// Transitions the view layer may offer from this status.
    ///
    /// ACCEPTE_ENTRETIEN only advances to ENTRETIEN_TERMINE once at least one
    /// linked interview completed; `can_complete_interview_stage` carries that
    /// extra condition, fed by the interview counts in `filters`.
    pub fn transitions(self) -> &'static [ApplicationStatus] {
        match self {
            ApplicationStatus::EnAttente => &[ApplicationStatus::EnCours],
            ApplicationStatus::EnCours => {
                &[ApplicationStatus::AccepteEntretien, ApplicationStatus::Refuse]
            }
            ApplicationStatus::AccepteEntretien => &[ApplicationStatus::EntretienTermine],
            ApplicationStatus::EntretienTermine => &[
                ApplicationStatus::Embauche,
                ApplicationStatus::RefuseApresEntretien,
            ],
            ApplicationStatus::Refuse
            | ApplicationStatus::Embauche
            | ApplicationStatus::RefuseApresEntretien => &[],
        }
    }

    pub fn is_terminal(self) -> bool {
        self.transitions().is_empty()
    }

    /// Whether the HR actions card is shown at all.
    pub fn can_process(self) -> bool {
        !matches!(self, ApplicationStatus::Refuse | ApplicationStatus::Embauche)
    }

    /// A comment is mandatory for both rejection variants, optional otherwise.
    pub fn requires_comment(self) -> bool {
        matches!(
            self,
            ApplicationStatus::Refuse | ApplicationStatus::RefuseApresEntretien
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            ApplicationStatus::EnAttente => "En attente",
            ApplicationStatus::EnCours => "En cours",
            ApplicationStatus::AccepteEntretien => "Convoqué",
            ApplicationStatus::EntretienTermine => "Entretien effectué",
            ApplicationStatus::Refuse => "Refusé",
            ApplicationStatus::Embauche => "Embauché",
            ApplicationStatus::RefuseApresEntretien => "Refusé (entretien)",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ApplicationStatus::EnAttente => "status-pending",
            ApplicationStatus::EnCours => "status-progress",
            ApplicationStatus::AccepteEntretien => "status-interview",
            ApplicationStatus::EntretienTermine => "status-interview-done",
            ApplicationStatus::Refuse => "status-rejected",
            ApplicationStatus::Embauche => "status-hired",
            ApplicationStatus::RefuseApresEntretien => "status-rejected-after",
        }
    }

    /// Softer wording shown to the candidate on their own applications.
    pub fn candidate_label(self) -> &'static str {
        match self {
            ApplicationStatus::EnAttente => "En cours d'examen",
            ApplicationStatus::EnCours => "En cours d'évaluation",
            ApplicationStatus::AccepteEntretien => "Convoqué en entretien",
            ApplicationStatus::EntretienTermine => "Entretien effectué",
            ApplicationStatus::Refuse => "Non retenu",
            ApplicationStatus::Embauche => "Félicitations ! Embauché",
            ApplicationStatus::RefuseApresEntretien => "Non retenu après entretien",
        }
    }

    pub fn candidate_message(self) -> &'static str {
        match self {
            ApplicationStatus::EnAttente => {
                "Votre candidature a bien été reçue et sera examinée prochainement."
            }
            ApplicationStatus::EnCours => "Votre candidature est en cours d'évaluation.",
            ApplicationStatus::AccepteEntretien => {
                "Vous avez été sélectionné(e) pour un entretien."
            }
            ApplicationStatus::EntretienTermine => {
                "Votre entretien s'est déroulé. Nous vous contacterons bientôt."
            }
            ApplicationStatus::Refuse => "Nous vous remercions pour votre candidature.",
            ApplicationStatus::Embauche => {
                "Félicitations ! Nous sommes ravis de vous accueillir dans notre équipe."
            }
            ApplicationStatus::RefuseApresEntretien => {
                "Nous vous remercions pour le temps accordé lors de l'entretien."
            }
        }
    }

    /// Modal title when processing towards this status.
    pub fn action_label(self) -> &'static str {
        match self {
            ApplicationStatus::EnAttente => "Remettre en attente",
            ApplicationStatus::EnCours => "Mettre en cours",
            ApplicationStatus::AccepteEntretien => "Convoquer en entretien",
            ApplicationStatus::EntretienTermine => "Marquer entretien terminé",
            ApplicationStatus::Refuse => "Refuser la candidature",
            ApplicationStatus::Embauche => "Embaucher le candidat",
            ApplicationStatus::RefuseApresEntretien => "Refuser après entretien",
        }
    }
}

impl InterviewStatus {
    pub fn transitions(self) -> &'static [InterviewStatus] {
        match self {
            InterviewStatus::Planifie => &[InterviewStatus::Termine, InterviewStatus::Annule],
            InterviewStatus::Termine | InterviewStatus::Annule => &[],
        }
    }

    pub fn is_terminal(self) -> bool {
        self.transitions().is_empty()
    }

    pub fn label(self) -> &'static str {
        match self {
            InterviewStatus::Planifie => "Planifié",
            InterviewStatus::Termine => "Terminé",
            InterviewStatus::Annule => "Annulé",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            InterviewStatus::Planifie => "status-planned",
            InterviewStatus::Termine => "status-completed",
            InterviewStatus::Annule => "status-cancelled",
        }
    }
}

impl InterviewType {
    pub fn label(self) -> &'static str {
        match self {
            InterviewType::Visio => "Visioconférence",
            InterviewType::Presentiel => "Présentiel",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            InterviewType::Visio => "Visio",
            InterviewType::Presentiel => "Présentiel",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            InterviewType::Visio => "type-visio",
            InterviewType::Presentiel => "type-onsite",
        }
    }
}

/// Interviews may only be attached in these two statuses.
pub fn can_create_interview(status: ApplicationStatus) -> bool {
    matches!(
        status,
        ApplicationStatus::AccepteEntretien | ApplicationStatus::EntretienTermine
    )
}

/// Scheduling a new interview is blocked while one is still PLANIFIE.
pub fn can_schedule_interview(status: ApplicationStatus, pending: usize) -> bool {
    can_create_interview(status) && pending == 0
}

/// ACCEPTE_ENTRETIEN may only advance to ENTRETIEN_TERMINE once at least one
/// linked interview was actually held.
pub fn can_complete_interview_stage(status: ApplicationStatus, completed: usize) -> bool {
    status == ApplicationStatus::AccepteEntretien && completed > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use ApplicationStatus::*;

    #[test]
    fn transition_sets_match_the_progression() {
        assert_eq!(EnAttente.transitions(), &[EnCours]);
        assert_eq!(EnCours.transitions(), &[AccepteEntretien, Refuse]);
        assert_eq!(AccepteEntretien.transitions(), &[EntretienTermine]);
        assert_eq!(
            EntretienTermine.transitions(),
            &[Embauche, RefuseApresEntretien]
        );
        assert!(Refuse.transitions().is_empty());
        assert!(Embauche.transitions().is_empty());
        assert!(RefuseApresEntretien.transitions().is_empty());
    }

    #[test]
    fn no_status_offers_an_action_outside_its_transitions() {
        for status in ApplicationStatus::ALL {
            for target in status.transitions() {
                assert_ne!(status, *target);
            }
        }
    }

    #[test]
    fn comment_required_exactly_for_rejections() {
        for status in ApplicationStatus::ALL {
            let expected = matches!(status, Refuse | RefuseApresEntretien);
            assert_eq!(status.requires_comment(), expected, "{:?}", status);
        }
    }

    #[test]
    fn processing_blocked_on_hard_terminals_only() {
        assert!(!Refuse.can_process());
        assert!(!Embauche.can_process());
        // Refusal after interview still shows the (empty) actions card,
        // mirroring the processing gate of the detail view.
        assert!(RefuseApresEntretien.can_process());
        assert!(EnAttente.can_process());
    }

    #[test]
    fn interview_machine_is_two_step() {
        assert_eq!(
            InterviewStatus::Planifie.transitions(),
            &[InterviewStatus::Termine, InterviewStatus::Annule]
        );
        assert!(InterviewStatus::Termine.is_terminal());
        assert!(InterviewStatus::Annule.is_terminal());
    }

    #[test]
    fn scheduling_gated_on_status_and_pending_count() {
        assert!(can_schedule_interview(AccepteEntretien, 0));
        assert!(can_schedule_interview(EntretienTermine, 0));
        assert!(!can_schedule_interview(AccepteEntretien, 1));
        assert!(!can_schedule_interview(EnCours, 0));
        assert!(!can_schedule_interview(Embauche, 0));
    }

    #[test]
    fn interview_stage_completion_gated_on_held_interview() {
        assert!(!can_complete_interview_stage(AccepteEntretien, 0));
        assert!(can_complete_interview_stage(AccepteEntretien, 1));
        assert!(can_complete_interview_stage(AccepteEntretien, 2));
        // Only the convoked status has this transition to gate.
        assert!(!can_complete_interview_stage(EnCours, 1));
        assert!(!can_complete_interview_stage(EntretienTermine, 1));
    }
}
