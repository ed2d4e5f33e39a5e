#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Labour Force Survey attribute taxonomies used by the wage model.
//!
//! Each categorical input the model was trained on is a single enum whose
//! variants declare both the human-readable label accepted by the API and
//! the code the model's feature schema expects. The label lives in the
//! `strum` `serialize` attribute and the code in the `code` property, so
//! the two can never be maintained as separate tables.
//!
//! Codes follow the Statistics Canada microdata conventions (NOC, NAICS,
//! SGC province codes) and must not be renumbered: the occupation
//! classification has no code `34`, and province codes are not
//! sequential.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumProperty, EnumString, IntoStaticStr, VariantNames};

/// Errors raised while translating a label into its model code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// The label is not a member of the attribute's enumeration.
    #[error("Unknown {attribute} label: {label:?}")]
    UnknownLabel {
        /// Query parameter name of the attribute.
        attribute: &'static str,
        /// The rejected label.
        label: String,
    },

    /// A valid member has no code attached. The enumeration and the
    /// model schema have drifted apart.
    #[error("No model code mapped for {attribute} label {label:?}")]
    MissingMapping {
        /// Query parameter name of the attribute.
        attribute: &'static str,
        /// The member that lacks a code.
        label: String,
    },
}

/// A categorical input of the wage model.
///
/// Implementors are closed enumerations: every variant has exactly one
/// label and exactly one code.
pub trait Attribute:
    Copy
    + Eq
    + std::fmt::Debug
    + std::str::FromStr
    + strum::EnumProperty
    + IntoEnumIterator
    + strum::VariantNames
    + Into<&'static str>
    + 'static
{
    /// Query parameter name accepted by the API.
    const PARAM: &'static str;
    /// Column name in the model's feature schema.
    const FEATURE: &'static str;
    /// Short human description of the attribute.
    const DESCRIPTION: &'static str;

    /// The human-readable label of this member.
    fn label(self) -> &'static str {
        self.into()
    }

    /// All valid labels, in declaration order.
    #[must_use]
    fn labels() -> &'static [&'static str] {
        Self::VARIANTS
    }

    /// All members, in declaration order.
    #[must_use]
    fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    /// The model code for this member.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::MissingMapping`] if the member has no code.
    fn code(self) -> Result<&'static str, EncodingError> {
        strum::EnumProperty::get_str(&self, "code")
            .filter(|code| !code.is_empty())
            .ok_or_else(|| EncodingError::MissingMapping {
                attribute: Self::PARAM,
                label: self.label().to_string(),
            })
    }

    /// Looks up the model code for a raw label.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::UnknownLabel`] if `label` is not a member,
    /// or [`EncodingError::MissingMapping`] if the member has no code.
    fn encode(label: &str) -> Result<&'static str, EncodingError> {
        let member = label
            .parse::<Self>()
            .map_err(|_| EncodingError::UnknownLabel {
                attribute: Self::PARAM,
                label: label.to_string(),
            })?;
        member.code()
    }
}

/// Serializes each attribute as its label, and rejects unknown labels with
/// the list of accepted ones.
macro_rules! label_serde {
    ($($ty:ty),+ $(,)?) => {$(
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str((*self).label())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = String::deserialize(deserializer)?;
                label.parse().map_err(|_| {
                    serde::de::Error::unknown_variant(&label, <$ty as strum::VariantNames>::VARIANTS)
                })
            }
        }
    )+};
}

/// Occupation group, coded on the 43-group NOC aggregation (`NOC_43`).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumProperty,
    VariantNames,
)]
pub enum Occupation {
    #[default]
    #[strum(serialize = "Legislative and senior management occupations", props(code = "01"))]
    SeniorManagement,
    #[strum(serialize = "Specialized middle management occupations", props(code = "02"))]
    MiddleManagement,
    #[strum(
        serialize = "Middle management occupations in retail and wholesale trade and customer services",
        props(code = "03")
    )]
    RetailManagement,
    #[strum(
        serialize = "Middle management occupations in trades, transportation, production and utilities",
        props(code = "04")
    )]
    TradesManagement,
    #[strum(serialize = "Professional occupations in finance", props(code = "05"))]
    FinanceProfessional,
    #[strum(serialize = "Professional occupations in business", props(code = "06"))]
    BusinessProfessional,
    #[strum(
        serialize = "Administrative and financial supervisors and specialized administrative occupations",
        props(code = "07")
    )]
    AdminSupervisors,
    #[strum(
        serialize = "Administrative occupations and transportation logistics occupations",
        props(code = "08")
    )]
    AdminSupport,
    #[strum(
        serialize = "Administrative and financial support and supply chain logistics occupations",
        props(code = "09")
    )]
    Logistics,
    #[strum(serialize = "Professional occupations in natural sciences", props(code = "10"))]
    NaturalScience,
    #[strum(
        serialize = "Professional occupations in applied sciences (except engineering)",
        props(code = "11")
    )]
    AppliedScience,
    #[strum(serialize = "Professional occupations in engineering", props(code = "12"))]
    Engineering,
    #[strum(
        serialize = "Technical occupations related to natural and applied sciences",
        props(code = "13")
    )]
    TechScience,
    #[strum(
        serialize = "Health treating and consultation services professionals",
        props(code = "14")
    )]
    HealthProfessional,
    #[strum(serialize = "Therapy and assessment professionals", props(code = "15"))]
    Therapy,
    #[strum(serialize = "Nursing and allied health professionals", props(code = "16"))]
    Nursing,
    #[strum(serialize = "Technical occupations in health", props(code = "17"))]
    HealthTech,
    #[strum(
        serialize = "Assisting occupations in support of health services",
        props(code = "18")
    )]
    HealthSupport,
    #[strum(serialize = "Professional occupations in law", props(code = "19"))]
    Law,
    #[strum(serialize = "Professional occupations in education services", props(code = "20"))]
    Education,
    #[strum(
        serialize = "Professional occupations in social and community services",
        props(code = "21")
    )]
    SocialServices,
    #[strum(serialize = "Professional occupations in government services", props(code = "22"))]
    Government,
    #[strum(
        serialize = "Occupations in front-line public protection services",
        props(code = "23")
    )]
    PublicProtection,
    #[strum(
        serialize = "Paraprofessional occupations in legal, social, community and education services",
        props(code = "24")
    )]
    Paraprofessional,
    #[strum(
        serialize = "Assisting occupations in education and in legal and public protection",
        props(code = "25")
    )]
    EducationSupport,
    #[strum(
        serialize = "Care providers and public protection support occupations and student monitors, crossing guards and related occupations",
        props(code = "26")
    )]
    CareProviders,
    #[strum(serialize = "Professional occupations in art and culture", props(code = "27"))]
    Arts,
    #[strum(serialize = "Technical occupations in art, culture, sport", props(code = "28"))]
    TechArts,
    #[strum(serialize = "Occupations in art, culture and sport", props(code = "29"))]
    CultureSupport,
    #[strum(
        serialize = "Retail sales and service supervisors and specialized occupations in sales and services",
        props(code = "30")
    )]
    SalesSupervisors,
    #[strum(serialize = "Occupations in sales and services", props(code = "31"))]
    Sales,
    #[strum(
        serialize = "Sales and service representatives and other customer and personal services occupations",
        props(code = "32")
    )]
    CustomerService,
    #[strum(serialize = "Sales and service support occupations", props(code = "33"))]
    SalesSupport,
    // NOC_43 has no group 34.
    #[strum(
        serialize = "Technical trades and transportation officers and controllers",
        props(code = "35")
    )]
    TradesTech,
    #[strum(serialize = "General trades", props(code = "36"))]
    Trades,
    #[strum(
        serialize = "Mail and message distribution, other transport equipment operators and related maintenance workers",
        props(code = "37")
    )]
    TransportOps,
    #[strum(
        serialize = "Helpers and labourers and other transport drivers, operators and labourers",
        props(code = "38")
    )]
    TransportLabour,
    #[strum(
        serialize = "Supervisors and occupations in natural resources, agriculture and related production",
        props(code = "39")
    )]
    ResourceSupervisors,
    #[strum(
        serialize = "Workers and labourers in natural resources, agriculture and related production",
        props(code = "40")
    )]
    ResourceWorkers,
    #[strum(
        serialize = "Supervisors, central control and process operators in processing, manufacturing and utilities and aircraft assemblers and inspectors",
        props(code = "41")
    )]
    ProcessSupervisors,
    #[strum(
        serialize = "Machine operators, assemblers and inspectors in processing, manufacturing and printing",
        props(code = "42")
    )]
    MachineOperators,
    #[strum(
        serialize = "Labourers in processing, manufacturing and utilities",
        props(code = "43")
    )]
    Labourers,
}

impl Attribute for Occupation {
    const PARAM: &'static str = "occupation";
    const FEATURE: &'static str = "NOC_43";
    const DESCRIPTION: &'static str = "Current professional role or job category";
}

/// Industry sector, coded on the 21-group NAICS aggregation (`NAICS_21`).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumProperty,
    VariantNames,
)]
pub enum Industry {
    #[default]
    #[strum(serialize = "Agriculture", props(code = "01"))]
    Agriculture,
    #[strum(
        serialize = "Forestry and logging and support activities for forestry",
        props(code = "02")
    )]
    Forestry,
    #[strum(serialize = "Fishing, hunting and trapping", props(code = "03"))]
    Fishing,
    #[strum(
        serialize = "Mining, quarrying, and oil and gas extraction",
        props(code = "04")
    )]
    Mining,
    #[strum(serialize = "Utilities", props(code = "05"))]
    Utilities,
    #[strum(serialize = "Construction", props(code = "06"))]
    Construction,
    #[strum(serialize = "Manufacturing - durable goods", props(code = "07"))]
    MfgDurable,
    #[strum(serialize = "Manufacturing - non-durable goods", props(code = "08"))]
    MfgNonDurable,
    #[strum(serialize = "Wholesale trade", props(code = "09"))]
    Wholesale,
    #[strum(serialize = "Retail trade", props(code = "10"))]
    Retail,
    #[strum(serialize = "Transportation and warehousing", props(code = "11"))]
    Transportation,
    #[strum(serialize = "Finance and insurance", props(code = "12"))]
    Finance,
    #[strum(serialize = "Real estate and rental and leasing", props(code = "13"))]
    RealEstate,
    #[strum(
        serialize = "Professional, scientific and technical services",
        props(code = "14")
    )]
    Professional,
    #[strum(
        serialize = "Business, building and other support services",
        props(code = "15")
    )]
    BusinessSupport,
    #[strum(serialize = "Educational services", props(code = "16"))]
    Education,
    #[strum(serialize = "Health care and social assistance", props(code = "17"))]
    Health,
    #[strum(serialize = "Information, culture and recreation", props(code = "18"))]
    Information,
    #[strum(serialize = "Accommodation and food services", props(code = "19"))]
    Accommodation,
    #[strum(
        serialize = "Other services (except public administration)",
        props(code = "20")
    )]
    Other,
    #[strum(serialize = "Public administration", props(code = "21"))]
    Public,
}

impl Attribute for Industry {
    const PARAM: &'static str = "industry";
    const FEATURE: &'static str = "NAICS_21";
    const DESCRIPTION: &'static str = "General industry or business sector";
}

/// Highest level of formal schooling completed (`EDUC`).
///
/// Unlike the other attributes the model consumes this one as an ordinal
/// number, increasing with attainment.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumProperty,
    VariantNames,
)]
pub enum Education {
    #[default]
    #[strum(serialize = "0 to 8 years", props(code = "0"))]
    NoSchooling,
    #[strum(serialize = "Some high school", props(code = "1"))]
    SomeHighSchool,
    #[strum(serialize = "High school graduate", props(code = "2"))]
    HighSchool,
    #[strum(serialize = "Some postsecondary", props(code = "3"))]
    SomePostSecondary,
    #[strum(serialize = "Postsecondary certificate or diploma", props(code = "4"))]
    Diploma,
    #[strum(serialize = "Bachelor's degree", props(code = "5"))]
    Bachelors,
    #[strum(serialize = "Above bachelor's degree", props(code = "6"))]
    Graduate,
}

impl Education {
    /// The ordinal attainment level (0-6) fed to the model.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::MissingMapping`] if the member's code is
    /// absent or not a number.
    pub fn ordinal(self) -> Result<u8, EncodingError> {
        numeric_code(self)
    }
}

fn numeric_code<T: Attribute>(member: T) -> Result<u8, EncodingError> {
    member
        .code()?
        .parse()
        .map_err(|_| EncodingError::MissingMapping {
            attribute: T::PARAM,
            label: member.label().to_string(),
        })
}

impl Attribute for Education {
    const PARAM: &'static str = "education";
    const FEATURE: &'static str = "EDUC";
    const DESCRIPTION: &'static str = "Highest level of formal schooling completed";
}

/// Workforce size of the establishment (`ESTSIZE`).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumProperty,
    VariantNames,
)]
pub enum EstablishmentSize {
    #[default]
    #[strum(serialize = "Less than 20 employees", props(code = "1"))]
    LessThan20,
    #[strum(serialize = "20 to 99 employees", props(code = "2"))]
    From20To99,
    #[strum(serialize = "100 to 500 employees", props(code = "3"))]
    From100To500,
    #[strum(serialize = "More than 500 employees", props(code = "4"))]
    MoreThan500,
}

impl Attribute for EstablishmentSize {
    const PARAM: &'static str = "establishmentsize";
    const FEATURE: &'static str = "ESTSIZE";
    const DESCRIPTION: &'static str = "Workforce size of the establishment";
}

/// Gender (`GENDER`).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumProperty,
    VariantNames,
)]
pub enum Gender {
    #[default]
    #[strum(serialize = "Men+", props(code = "1"))]
    Men,
    #[strum(serialize = "Women+", props(code = "2"))]
    Women,
}

impl Attribute for Gender {
    const PARAM: &'static str = "gender";
    const FEATURE: &'static str = "GENDER";
    const DESCRIPTION: &'static str = "Gender identity";
}

/// Five-year age band (`AGE_12`).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumProperty,
    VariantNames,
)]
pub enum AgeGroup {
    #[default]
    #[strum(serialize = "15 to 19 years", props(code = "01"))]
    Age15To19,
    #[strum(serialize = "20 to 24 years", props(code = "02"))]
    Age20To24,
    #[strum(serialize = "25 to 29 years", props(code = "03"))]
    Age25To29,
    #[strum(serialize = "30 to 34 years", props(code = "04"))]
    Age30To34,
    #[strum(serialize = "35 to 39 years", props(code = "05"))]
    Age35To39,
    #[strum(serialize = "40 to 44 years", props(code = "06"))]
    Age40To44,
    #[strum(serialize = "45 to 49 years", props(code = "07"))]
    Age45To49,
    #[strum(serialize = "50 to 54 years", props(code = "08"))]
    Age50To54,
    #[strum(serialize = "55 to 59 years", props(code = "09"))]
    Age55To59,
    #[strum(serialize = "60 to 64 years", props(code = "10"))]
    Age60To64,
    #[strum(serialize = "65 to 69 years", props(code = "11"))]
    Age65To69,
    #[strum(serialize = "70 and over", props(code = "12"))]
    Age70Plus,
}

impl Attribute for AgeGroup {
    const PARAM: &'static str = "age";
    const FEATURE: &'static str = "AGE_12";
    const DESCRIPTION: &'static str = "Current range";
}

/// Province of employment, coded with the Standard Geographical
/// Classification (`PROV`). The territories are not covered by the survey.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumProperty,
    VariantNames,
)]
pub enum Province {
    #[default]
    #[strum(serialize = "Newfoundland and Labrador", props(code = "10"))]
    NewfoundlandAndLabrador,
    #[strum(serialize = "Prince Edward Island", props(code = "11"))]
    PrinceEdwardIsland,
    #[strum(serialize = "Nova Scotia", props(code = "12"))]
    NovaScotia,
    #[strum(serialize = "New Brunswick", props(code = "13"))]
    NewBrunswick,
    #[strum(serialize = "Quebec", props(code = "24"))]
    Quebec,
    #[strum(serialize = "Ontario", props(code = "35"))]
    Ontario,
    #[strum(serialize = "Manitoba", props(code = "46"))]
    Manitoba,
    #[strum(serialize = "Saskatchewan", props(code = "47"))]
    Saskatchewan,
    #[strum(serialize = "Alberta", props(code = "48"))]
    Alberta,
    #[strum(serialize = "British Columbia", props(code = "59"))]
    BritishColumbia,
}

impl Attribute for Province {
    const PARAM: &'static str = "province";
    const FEATURE: &'static str = "PROV";
    const DESCRIPTION: &'static str = "Province of employment";
}

/// Union membership or collective agreement coverage (`UNION`).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
    EnumProperty,
    VariantNames,
)]
pub enum UnionStatus {
    #[default]
    #[strum(serialize = "Union member", props(code = "1"))]
    Member,
    #[strum(
        serialize = "Not a member but covered by a union contract or collective agreement",
        props(code = "2")
    )]
    CoveredByContract,
    #[strum(serialize = "Non-unionized", props(code = "3"))]
    NonUnionized,
}

impl Attribute for UnionStatus {
    const PARAM: &'static str = "union";
    const FEATURE: &'static str = "UNION";
    const DESCRIPTION: &'static str = "Union membership status";
}

label_serde!(
    Occupation,
    Industry,
    Education,
    EstablishmentSize,
    Gender,
    AgeGroup,
    Province,
    UnionStatus,
);
