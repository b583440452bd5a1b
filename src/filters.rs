//! Derived lists and statistics.
//!
//! Pure functions of (source list, criteria); the pages only hold the source
//! list and the filter signals.

use chrono::NaiveDateTime;

use crate::datetime;
use crate::models::{
    Application, ApplicationStatus, Interview, InterviewStatus, InterviewType,
};

fn sort_key(s: &str) -> NaiveDateTime {
    datetime::parse(s).unwrap_or(NaiveDateTime::MIN)
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn matches_application(app: &Application, needle: &str) -> bool {
    contains(&app.firstname, needle)
        || contains(&app.lastname, needle)
        || contains(&app.email, needle)
        || contains(&app.job_offer.title, needle)
}

/// Status filter + candidate/job search, newest first.
pub fn filter_applications(
    applications: &[Application],
    status: Option<ApplicationStatus>,
    search: &str,
) -> Vec<Application> {
    let needle = search.trim().to_lowercase();
    let mut filtered: Vec<Application> = applications
        .iter()
        .filter(|app| status.map_or(true, |s| app.status == s))
        .filter(|app| needle.is_empty() || matches_application(app, &needle))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| sort_key(&b.application_date).cmp(&sort_key(&a.application_date)));
    filtered
}

/// Status/type filters + candidate/job search, newest first.
pub fn filter_interviews(
    interviews: &[Interview],
    status: Option<InterviewStatus>,
    interview_type: Option<InterviewType>,
    search: &str,
) -> Vec<Interview> {
    let needle = search.trim().to_lowercase();
    let mut filtered: Vec<Interview> = interviews
        .iter()
        .filter(|itv| status.map_or(true, |s| itv.status == s))
        .filter(|itv| interview_type.map_or(true, |t| itv.interview_type == t))
        .filter(|itv| needle.is_empty() || matches_application(&itv.application, &needle))
        .cloned()
        .collect();
    filtered.sort_by(|a, b| sort_key(&b.interview_date).cmp(&sort_key(&a.interview_date)));
    filtered
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplicationStats {
    pub total: usize,
    pub en_attente: usize,
    pub en_cours: usize,
    pub embauche: usize,
    pub refuse: usize,
}

pub fn application_stats(applications: &[Application]) -> ApplicationStats {
    let mut stats = ApplicationStats {
        total: applications.len(),
        ..Default::default()
    };
    for app in applications {
        match app.status {
            ApplicationStatus::EnAttente => stats.en_attente += 1,
            ApplicationStatus::EnCours => stats.en_cours += 1,
            ApplicationStatus::Embauche => stats.embauche += 1,
            ApplicationStatus::Refuse | ApplicationStatus::RefuseApresEntretien => {
                stats.refuse += 1
            }
            _ => {}
        }
    }
    stats
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterviewStats {
    pub total: usize,
    pub planifie: usize,
    pub termine: usize,
    pub annule: usize,
}

pub fn interview_stats(interviews: &[Interview]) -> InterviewStats {
    let mut stats = InterviewStats {
        total: interviews.len(),
        ..Default::default()
    };
    for itv in interviews {
        match itv.status {
            InterviewStatus::Planifie => stats.planifie += 1,
            InterviewStatus::Termine => stats.termine += 1,
            InterviewStatus::Annule => stats.annule += 1,
        }
    }
    stats
}

/// The interview list joined to one application, computed client-side.
pub fn interviews_for_application(interviews: &[Interview], application_id: u32) -> Vec<Interview> {
    interviews
        .iter()
        .filter(|itv| itv.application.id == application_id)
        .cloned()
        .collect()
}

pub fn pending_interview_count(interviews: &[Interview], application_id: u32) -> usize {
    interviews
        .iter()
        .filter(|itv| itv.application.id == application_id)
        .filter(|itv| itv.status == InterviewStatus::Planifie)
        .count()
}

pub fn completed_interview_count(interviews: &[Interview], application_id: u32) -> usize {
    interviews
        .iter()
        .filter(|itv| itv.application.id == application_id)
        .filter(|itv| itv.status == InterviewStatus::Termine)
        .count()
}

/// Still PLANIFIE and in the future.
pub fn upcoming_interviews(interviews: &[Interview], now: NaiveDateTime) -> Vec<Interview> {
    interviews
        .iter()
        .filter(|itv| itv.status == InterviewStatus::Planifie)
        .filter(|itv| datetime::parse(&itv.interview_date).map_or(false, |d| d > now))
        .cloned()
        .collect()
}

/// Already held, or dated in the past.
pub fn past_interviews(interviews: &[Interview], now: NaiveDateTime) -> Vec<Interview> {
    interviews
        .iter()
        .filter(|itv| {
            itv.status == InterviewStatus::Termine
                || datetime::parse(&itv.interview_date).map_or(false, |d| d < now)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContractType, JobOffer, Specialty};

    fn offer(title: &str) -> JobOffer {
        JobOffer {
            id: 1,
            title: title.to_string(),
            specialty: Specialty::It,
            contract_type: ContractType::Cdi,
            content: String::new(),
            address: None,
            salary: None,
            is_active: true,
            creation_date: "2025-01-01T08:00:00".into(),
            updated_at: None,
            applications_count: None,
        }
    }

    fn application(id: u32, status: ApplicationStatus, date: &str, lastname: &str) -> Application {
        Application {
            id,
            firstname: "Alex".into(),
            lastname: lastname.into(),
            email: format!("{}@exemple.fr", lastname.to_lowercase()),
            phone: "0601020304".into(),
            birthdate: None,
            address: None,
            cv_path: None,
            cover_letter: String::new(),
            status,
            application_date: date.into(),
            processed_at: None,
            comment: None,
            updated_at: None,
            job_offer: offer("Développeur Rust"),
            user: None,
        }
    }

    fn interview(id: u32, app_id: u32, status: InterviewStatus, date: &str) -> Interview {
        let mut app = application(app_id, ApplicationStatus::AccepteEntretien, date, "Durand");
        app.id = app_id;
        Interview {
            id,
            interview_date: date.into(),
            interview_type: InterviewType::Visio,
            visio_link: None,
            address: None,
            status,
            notes: None,
            created_at: date.into(),
            updated_at: None,
            cancelled_at: None,
            application: app,
        }
    }

    #[test]
    fn applications_filtered_and_sorted_newest_first() {
        let apps = vec![
            application(1, ApplicationStatus::EnAttente, "2025-01-05T10:00:00", "Durand"),
            application(2, ApplicationStatus::EnCours, "2025-01-08T10:00:00", "Martin"),
            application(3, ApplicationStatus::EnAttente, "2025-01-07T10:00:00", "Petit"),
        ];

        let all = filter_applications(&apps, None, "");
        assert_eq!(
            all.iter().map(|a| a.id).collect::<Vec<_>>(),
            vec![2, 3, 1]
        );

        let pending = filter_applications(&apps, Some(ApplicationStatus::EnAttente), "");
        assert_eq!(pending.iter().map(|a| a.id).collect::<Vec<_>>(), vec![3, 1]);
    }

    #[test]
    fn search_matches_name_email_and_job_title() {
        let apps = vec![
            application(1, ApplicationStatus::EnAttente, "2025-01-05T10:00:00", "Durand"),
            application(2, ApplicationStatus::EnAttente, "2025-01-06T10:00:00", "Martin"),
        ];
        assert_eq!(filter_applications(&apps, None, "DURAND").len(), 1);
        assert_eq!(filter_applications(&apps, None, "martin@exemple").len(), 1);
        // Both share the same job title.
        assert_eq!(filter_applications(&apps, None, "rust").len(), 2);
        assert!(filter_applications(&apps, None, "introuvable").is_empty());
    }

    #[test]
    fn stats_sum_both_rejection_variants() {
        let apps = vec![
            application(1, ApplicationStatus::Refuse, "2025-01-01T10:00:00", "A"),
            application(2, ApplicationStatus::RefuseApresEntretien, "2025-01-02T10:00:00", "B"),
            application(3, ApplicationStatus::Embauche, "2025-01-03T10:00:00", "C"),
            application(4, ApplicationStatus::EnAttente, "2025-01-04T10:00:00", "D"),
        ];
        let stats = application_stats(&apps);
        assert_eq!(stats.total, 4);
        assert_eq!(stats.refuse, 2);
        assert_eq!(stats.embauche, 1);
        assert_eq!(stats.en_attente, 1);
    }

    #[test]
    fn interview_counts_scoped_to_application() {
        let interviews = vec![
            interview(1, 10, InterviewStatus::Planifie, "2025-02-01T10:00:00"),
            interview(2, 10, InterviewStatus::Termine, "2025-01-15T10:00:00"),
            interview(3, 11, InterviewStatus::Planifie, "2025-02-02T10:00:00"),
            interview(4, 10, InterviewStatus::Annule, "2025-01-10T10:00:00"),
        ];
        assert_eq!(interviews_for_application(&interviews, 10).len(), 3);
        assert_eq!(pending_interview_count(&interviews, 10), 1);
        assert_eq!(completed_interview_count(&interviews, 10), 1);
        assert_eq!(pending_interview_count(&interviews, 12), 0);
    }

    #[test]
    fn interview_filters_and_stats() {
        let interviews = vec![
            interview(1, 10, InterviewStatus::Planifie, "2025-02-01T10:00:00"),
            interview(2, 10, InterviewStatus::Termine, "2025-01-15T10:00:00"),
            interview(3, 11, InterviewStatus::Annule, "2025-02-02T10:00:00"),
        ];
        let planned = filter_interviews(&interviews, Some(InterviewStatus::Planifie), None, "");
        assert_eq!(planned.len(), 1);
        let visio = filter_interviews(&interviews, None, Some(InterviewType::Visio), "");
        assert_eq!(visio.len(), 3);
        let onsite = filter_interviews(&interviews, None, Some(InterviewType::Presentiel), "");
        assert!(onsite.is_empty());

        let stats = interview_stats(&interviews);
        assert_eq!((stats.total, stats.planifie, stats.termine, stats.annule), (3, 1, 1, 1));
    }

    #[test]
    fn upcoming_past_partition() {
        let now = datetime::parse("2025-01-20T12:00:00").unwrap();
        let interviews = vec![
            interview(1, 10, InterviewStatus::Planifie, "2025-02-01T10:00:00"),
            interview(2, 10, InterviewStatus::Planifie, "2025-01-10T10:00:00"),
            interview(3, 10, InterviewStatus::Termine, "2025-01-15T10:00:00"),
        ];
        let upcoming = upcoming_interviews(&interviews, now);
        assert_eq!(upcoming.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1]);
        let past = past_interviews(&interviews, now);
        assert_eq!(past.iter().map(|i| i.id).collect::<Vec<_>>(), vec![2, 3]);
    }
}
