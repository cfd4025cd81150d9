use serde::Deserialize;

use crate::shared::api_utils::get_json;
use crate::shared::endpoints;

#[derive(Debug, Deserialize)]
struct CountryDto {
    name: CountryName,
}

#[derive(Debug, Deserialize)]
struct CountryName {
    common: String,
}

/// Country names for the select options, from the public REST Countries
/// dataset. Callers fall back to [`fallback_countries`] when offline.
pub async fn fetch_countries() -> Result<Vec<String>, String> {
    let dtos: Vec<CountryDto> = get_json(endpoints::COUNTRIES).await?;
    let mut names: Vec<String> = dtos.into_iter().map(|c| c.name.common).collect();
    names.sort();
    names.dedup();
    Ok(names)
}

/// Countries present in the sample data plus a few common picks.
pub fn fallback_countries() -> Vec<String> {
    ["Brazil", "Canada", "China", "Germany", "India", "Japan", "Russia", "South Korea"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_is_sorted_and_unique() {
        let countries = fallback_countries();
        let mut sorted = countries.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(countries, sorted);
        assert!(countries.contains(&"India".to_string()));
    }

    #[test]
    fn test_country_dto_shape() {
        let json = r#"[{"name":{"common":"Japan","official":"Japan"}}]"#;
        let dtos: Vec<CountryDto> = serde_json::from_str(json).unwrap();
        assert_eq!(dtos[0].name.common, "Japan");
    }
}
