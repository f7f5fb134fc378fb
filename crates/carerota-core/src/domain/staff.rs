//! Staff roster entries and their certifications.

use chrono::NaiveDate;

use crate::id::{CertificationType, StaffId};

/// A certification held by a staff member.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Certification {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub cert_type: CertificationType,
    pub is_valid: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub expiry_date: Option<NaiveDate>,
}

impl Certification {
    /// Creates a valid certification with no expiry.
    pub fn new(cert_type: impl Into<CertificationType>) -> Self {
        Self {
            cert_type: cert_type.into(),
            is_valid: true,
            expiry_date: None,
        }
    }

    pub fn expiring(mut self, expiry_date: NaiveDate) -> Self {
        self.expiry_date = Some(expiry_date);
        self
    }

    /// Marks the certification as revoked or lapsed.
    pub fn invalid(mut self) -> Self {
        self.is_valid = false;
        self
    }

    /// Returns true if the certification may be relied upon on `date`.
    ///
    /// The flag must be set and the expiry date, if any, must not lie
    /// before `date`.
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.is_valid && self.expiry_date.map_or(true, |expiry| expiry >= date)
    }
}

/// A staff member as supplied by the staff directory.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Staff {
    pub id: StaffId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub certifications: Vec<Certification>,
}

impl Staff {
    pub fn new(id: impl Into<StaffId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            certifications: Vec::new(),
        }
    }

    pub fn with_certification(mut self, certification: Certification) -> Self {
        self.certifications.push(certification);
        self
    }

    /// Adds valid, non-expiring certifications of the given types.
    pub fn with_certifications(
        mut self,
        cert_types: impl IntoIterator<Item = impl Into<CertificationType>>,
    ) -> Self {
        self.certifications
            .extend(cert_types.into_iter().map(Certification::new));
        self
    }

    /// Returns true if this staff member holds `cert_type` and it is valid on `date`.
    pub fn holds(&self, cert_type: &CertificationType, date: NaiveDate) -> bool {
        self.certifications
            .iter()
            .any(|c| &c.cert_type == cert_type && c.is_valid_on(date))
    }

    /// Returns true if every certification in `required` is held on `date`.
    pub fn holds_all(&self, required: &[CertificationType], date: NaiveDate) -> bool {
        required.iter().all(|cert_type| self.holds(cert_type, date))
    }
}
