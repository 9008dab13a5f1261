use strum::{AsRefStr, Display, EnumString, VariantArray};

/// The six slots of the contact form. The string form doubles as the HTML
/// input name and as the key the validator reports errors under.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    FullName,
    Email,
    Subject,
    Message,
    QueryType,
    Address,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email Address",
            Field::Subject => "Subject",
            Field::Message => "Message",
            Field::QueryType => "Query Type",
            Field::Address => "Address",
        }
    }
}

#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum QueryType {
    Support,
    Sales,
    Feedback,
}

impl QueryType {
    pub fn label(&self) -> &'static str {
        match self {
            QueryType::Support => "Support",
            QueryType::Sales => "Sales",
            QueryType::Feedback => "Feedback",
        }
    }
}

#[derive(EnumString, Display, VariantArray, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Address {
    #[strum(serialize = "123 Main St, New York, NY")]
    MainStNewYork,
    #[strum(serialize = "456 Oak St, Los Angeles, CA")]
    OakStLosAngeles,
    #[strum(serialize = "789 Pine St, Chicago, IL")]
    PineStChicago,
    #[strum(serialize = "101 Maple St, Houston, TX")]
    MapleStHouston,
    #[strum(serialize = "202 Cedar St, Miami, FL")]
    CedarStMiami,
}
