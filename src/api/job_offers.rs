//! Job offer endpoints.

use super::client;
use super::ApiError;
use crate::models::{ContractType, JobOffer, Specialty};

pub fn search_query(
    keyword: Option<&str>,
    specialty: Option<Specialty>,
    contract_type: Option<ContractType>,
) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(keyword) = keyword.filter(|k| !k.is_empty()) {
        query.push(("keyword", keyword.to_string()));
    }
    if let Some(specialty) = specialty {
        query.push(("specialty", specialty.as_str().to_string()));
    }
    if let Some(contract_type) = contract_type {
        query.push(("contractType", contract_type.as_str().to_string()));
    }
    query
}

pub async fn get_active() -> Result<Vec<JobOffer>, ApiError> {
    client::get("/job-offers/active").await
}

pub async fn get_by_id(id: u32) -> Result<JobOffer, ApiError> {
    client::get(&format!("/job-offers/{id}")).await
}

pub async fn search(
    keyword: Option<&str>,
    specialty: Option<Specialty>,
    contract_type: Option<ContractType>,
) -> Result<Vec<JobOffer>, ApiError> {
    client::get_query(
        "/job-offers/search",
        &search_query(keyword, specialty, contract_type),
    )
    .await
}

pub async fn specialties() -> Result<Vec<Specialty>, ApiError> {
    client::get("/job-offers/specialties").await
}

pub async fn contract_types() -> Result<Vec<ContractType>, ApiError> {
    client::get("/job-offers/contract-types").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_query_omits_absent_criteria() {
        assert!(search_query(None, None, None).is_empty());
        assert!(search_query(Some(""), None, None).is_empty());
        assert_eq!(
            search_query(Some("rust"), Some(Specialty::It), Some(ContractType::Cdi)),
            vec![
                ("keyword", "rust".to_string()),
                ("specialty", "IT".to_string()),
                ("contractType", "CDI".to_string()),
            ]
        );
    }
}
