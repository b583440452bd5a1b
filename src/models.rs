//! Frontend Models
//!
//! Data structures matching the API entities. The client only ever holds
//! transient copies; every mutation goes through a service call.

use serde::{Deserialize, Serialize};

/// Account role, gates visible routes and actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Rh,
    Candidat,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::Candidat, UserRole::Rh, UserRole::Admin];

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Rh => "RH",
            UserRole::Candidat => "CANDIDAT",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ADMIN" => Some(UserRole::Admin),
            "RH" => Some(UserRole::Rh),
            "CANDIDAT" => Some(UserRole::Candidat),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: Option<String>,
    pub birthdate: Option<String>,
    pub role: UserRole,
    pub address: Option<Address>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub must_change_password: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Specialty {
    It,
    Finance,
    Marketing,
    Rh,
    Commercial,
    Logistique,
    Sante,
    Education,
}

impl Specialty {
    pub fn as_str(self) -> &'static str {
        match self {
            Specialty::It => "IT",
            Specialty::Finance => "FINANCE",
            Specialty::Marketing => "MARKETING",
            Specialty::Rh => "RH",
            Specialty::Commercial => "COMMERCIAL",
            Specialty::Logistique => "LOGISTIQUE",
            Specialty::Sante => "SANTE",
            Specialty::Education => "EDUCATION",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "IT" => Some(Specialty::It),
            "FINANCE" => Some(Specialty::Finance),
            "MARKETING" => Some(Specialty::Marketing),
            "RH" => Some(Specialty::Rh),
            "COMMERCIAL" => Some(Specialty::Commercial),
            "LOGISTIQUE" => Some(Specialty::Logistique),
            "SANTE" => Some(Specialty::Sante),
            "EDUCATION" => Some(Specialty::Education),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    Cdi,
    Cdd,
    Stage,
    Alternance,
}

impl ContractType {
    pub fn as_str(self) -> &'static str {
        match self {
            ContractType::Cdi => "CDI",
            ContractType::Cdd => "CDD",
            ContractType::Stage => "STAGE",
            ContractType::Alternance => "ALTERNANCE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "CDI" => Some(ContractType::Cdi),
            "CDD" => Some(ContractType::Cdd),
            "STAGE" => Some(ContractType::Stage),
            "ALTERNANCE" => Some(ContractType::Alternance),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobOffer {
    pub id: u32,
    pub title: String,
    pub specialty: Specialty,
    pub contract_type: ContractType,
    pub content: String,
    pub address: Option<Address>,
    pub salary: Option<f64>,
    #[serde(default)]
    pub is_active: bool,
    pub creation_date: String,
    pub updated_at: Option<String>,
    pub applications_count: Option<u32>,
}

/// Strict progression, see `lifecycle` for the transition sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    EnAttente,
    EnCours,
    AccepteEntretien,
    EntretienTermine,
    Refuse,
    Embauche,
    RefuseApresEntretien,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 7] = [
        ApplicationStatus::EnAttente,
        ApplicationStatus::EnCours,
        ApplicationStatus::AccepteEntretien,
        ApplicationStatus::EntretienTermine,
        ApplicationStatus::Refuse,
        ApplicationStatus::Embauche,
        ApplicationStatus::RefuseApresEntretien,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::EnAttente => "EN_ATTENTE",
            ApplicationStatus::EnCours => "EN_COURS",
            ApplicationStatus::AccepteEntretien => "ACCEPTE_ENTRETIEN",
            ApplicationStatus::EntretienTermine => "ENTRETIEN_TERMINE",
            ApplicationStatus::Refuse => "REFUSE",
            ApplicationStatus::Embauche => "EMBAUCHE",
            ApplicationStatus::RefuseApresEntretien => "REFUSE_APRES_ENTRETIEN",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: u32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub birthdate: Option<String>,
    pub address: Option<Address>,
    pub cv_path: Option<String>,
    pub cover_letter: String,
    pub status: ApplicationStatus,
    pub application_date: String,
    pub processed_at: Option<String>,
    pub comment: Option<String>,
    pub updated_at: Option<String>,
    pub job_offer: JobOffer,
    pub user: Option<User>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewType {
    Visio,
    Presentiel,
}

impl InterviewType {
    pub fn as_str(self) -> &'static str {
        match self {
            InterviewType::Visio => "VISIO",
            InterviewType::Presentiel => "PRESENTIEL",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "VISIO" => Some(InterviewType::Visio),
            "PRESENTIEL" => Some(InterviewType::Presentiel),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterviewStatus {
    Planifie,
    Termine,
    Annule,
}

impl InterviewStatus {
    pub const ALL: [InterviewStatus; 3] = [
        InterviewStatus::Planifie,
        InterviewStatus::Termine,
        InterviewStatus::Annule,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InterviewStatus::Planifie => "PLANIFIE",
            InterviewStatus::Termine => "TERMINE",
            InterviewStatus::Annule => "ANNULE",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interview {
    pub id: u32,
    pub interview_date: String,
    #[serde(rename = "type")]
    pub interview_type: InterviewType,
    pub visio_link: Option<String>,
    pub address: Option<Address>,
    pub status: InterviewStatus,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub cancelled_at: Option<String>,
    pub application: Application,
}

// ========================
// Request DTOs
// ========================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_password: Option<String>,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplication {
    pub job_offer_id: u32,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub cover_letter: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessApplication {
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterview {
    pub application_id: u32,
    pub interview_date: String,
    #[serde(rename = "type")]
    pub interview_type: InterviewType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visio_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInterview {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_date: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub interview_type: Option<InterviewType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visio_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<InterviewStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    pub role: UserRole,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn enums_use_wire_names() {
        assert_eq!(
            serde_json::to_value(ApplicationStatus::RefuseApresEntretien).unwrap(),
            json!("REFUSE_APRES_ENTRETIEN")
        );
        assert_eq!(serde_json::to_value(UserRole::Rh).unwrap(), json!("RH"));
        assert_eq!(serde_json::to_value(Specialty::It).unwrap(), json!("IT"));
        assert_eq!(
            serde_json::to_value(InterviewType::Presentiel).unwrap(),
            json!("PRESENTIEL")
        );
        assert_eq!(
            ApplicationStatus::parse("ACCEPTE_ENTRETIEN"),
            Some(ApplicationStatus::AccepteEntretien)
        );
        assert_eq!(ApplicationStatus::parse(""), None);
    }

    #[test]
    fn create_application_omits_absent_optionals() {
        let payload = CreateApplication {
            job_offer_id: 3,
            firstname: "Marie".into(),
            lastname: "Durand".into(),
            email: "marie@exemple.fr".into(),
            phone: "0601020304".into(),
            birthdate: None,
            address: None,
            cover_letter: "Motivée.".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["jobOfferId"], json!(3));
        assert_eq!(value["coverLetter"], json!("Motivée."));
        assert!(value.get("birthdate").is_none());
        assert!(value.get("address").is_none());
    }

    #[test]
    fn submitted_fields_round_trip_through_get_by_id() {
        // The API echoes every submitted field back on the created entity.
        let payload = CreateApplication {
            job_offer_id: 7,
            firstname: "Jean".into(),
            lastname: "Martin".into(),
            email: "jean@exemple.fr".into(),
            phone: "0711223344".into(),
            birthdate: Some("1992-04-01".into()),
            address: Some(Address {
                number: "12".into(),
                street: "rue des Lilas".into(),
                postal_code: "75011".into(),
                city: "Paris".into(),
                country: "France".into(),
            }),
            cover_letter: "Bonjour".into(),
        };
        let mut body = serde_json::to_value(&payload).unwrap();
        let echoed = body.as_object_mut().unwrap();
        echoed.remove("jobOfferId");
        echoed.insert("id".into(), json!(41));
        echoed.insert("status".into(), json!("EN_ATTENTE"));
        echoed.insert("applicationDate".into(), json!("2025-01-10T09:00:00"));
        echoed.insert(
            "jobOffer".into(),
            json!({
                "id": 7,
                "title": "Développeur",
                "specialty": "IT",
                "contractType": "CDI",
                "content": "...",
                "isActive": true,
                "creationDate": "2025-01-01T08:00:00"
            }),
        );

        let fetched: Application = serde_json::from_value(body).unwrap();
        assert_eq!(fetched.firstname, payload.firstname);
        assert_eq!(fetched.lastname, payload.lastname);
        assert_eq!(fetched.email, payload.email);
        assert_eq!(fetched.phone, payload.phone);
        assert_eq!(fetched.birthdate, payload.birthdate);
        assert_eq!(fetched.address, payload.address);
        assert_eq!(fetched.cover_letter, payload.cover_letter);
        assert_eq!(fetched.job_offer.id, payload.job_offer_id);
        assert_eq!(fetched.status, ApplicationStatus::EnAttente);
    }

    #[test]
    fn interview_type_field_uses_type_key() {
        let update = UpdateInterview {
            status: Some(InterviewStatus::Termine),
            notes: Some("ok".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value, json!({"status": "TERMINE", "notes": "ok"}));

        let create = CreateInterview {
            application_id: 5,
            interview_date: "2025-02-01T10:00".into(),
            interview_type: InterviewType::Visio,
            visio_link: Some("https://meet.example/abc".into()),
            address: None,
            notes: None,
        };
        let value = serde_json::to_value(&create).unwrap();
        assert_eq!(value["type"], json!("VISIO"));
        assert_eq!(value["applicationId"], json!(5));
        assert!(value.get("address").is_none());
    }
}
