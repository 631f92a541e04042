use ahash::AHashSet;
use serde::{Deserialize, Deserializer, Serialize};

/// Identifier of a doctor record - integer, other JSON number or string,
/// as served by the endpoint
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Integer(u64),
    /// Negative or fractional numeric ids
    Number(serde_json::Number),
    String(String),
}

/// Treats an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordId::Integer(i) => write!(f, "{}", i),
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for RecordId {
    fn from(i: u64) -> Self {
        RecordId::Integer(i)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        RecordId::String(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::String(s.to_string())
    }
}

impl RecordId {
    /// Numeric text becomes a numeric id, anything else a string id
    pub fn parse(s: &str) -> Self {
        if let Ok(i) = s.parse::<u64>() {
            return RecordId::Integer(i);
        }
        match s.parse::<serde_json::Number>() {
            Ok(n) => RecordId::Number(n),
            Err(_) => RecordId::String(s.to_string()),
        }
    }
}

impl std::str::FromStr for RecordId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(RecordId::parse(s))
    }
}

/// Contact details, display-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
}

/// One education entry, display-only. `year` is shown as served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default, deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(default)]
    pub year: serde_json::Value,
}

/// A doctor profile.
///
/// The ranking and filtering fields are required; a payload missing any of
/// them fails to deserialize. Display-only fields default when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub specialty: String,
    pub area: String,
    pub review_score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub years_of_experience: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
}

impl Record {
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        specialty: impl Into<String>,
        area: impl Into<String>,
        review_score: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            specialty: specialty.into(),
            area: area.into(),
            review_score,
            years_of_experience: 0.0,
            contact: None,
            education: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn with_experience(mut self, years: impl Into<f64>) -> Self {
        self.years_of_experience = years.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_contact(mut self, email: impl Into<String>, phone: impl Into<String>) -> Self {
        self.contact = Some(Contact {
            email: email.into(),
            phone: phone.into(),
        });
        self
    }

    #[inline]
    #[must_use]
    pub fn with_education(mut self, education: Education) -> Self {
        self.education.push(education);
        self
    }

    /// Last whitespace-separated token of the name
    pub fn surname(&self) -> &str {
        self.name.split_whitespace().last().unwrap_or(&self.name)
    }

    /// Parse a JSON array of records, rejecting duplicate ids
    pub fn parse_list(json: &[u8]) -> crate::Result<Vec<Record>> {
        let records: Vec<Record> = serde_json::from_slice(json)
            .map_err(|e| crate::Error::Serialization(e.to_string()))?;
        check_unique_ids(&records)?;
        Ok(records)
    }
}

/// Fails on the first id that appears twice
pub fn check_unique_ids(records: &[Record]) -> crate::Result<()> {
    let mut seen = AHashSet::with_capacity(records.len());
    for record in records {
        if !seen.insert(&record.id) {
            return Err(crate::Error::DuplicateId(record.id.to_string()));
        }
    }
    Ok(())
}

/// Look up a record by id
pub fn find<'a>(records: &'a [Record], id: &RecordId) -> crate::Result<&'a Record> {
    records
        .iter()
        .find(|r| &r.id == id)
        .ok_or_else(|| crate::Error::RecordNotFound(id.to_string()))
}

impl std::fmt::Display for Education {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} from {}", self.degree, self.institution)?;
        // year may arrive as a number, a string or not at all
        match &self.year {
            serde_json::Value::Null => Ok(()),
            serde_json::Value::String(s) => write!(f, ", {}", s),
            other => write!(f, ", {}", other),
        }
    }
}
