//! Form document: the typed registry of fields and dependent groups

use super::field::{FieldId, FormField, SelectOption};

/// Symbolic names for the dependent field groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupId {
    /// Business-name fields, gated by account type
    BusinessFields,
    /// State + zip fields, gated by country
    StateZipFields,
}

/// A set of form controls shown and required together
#[derive(Debug, Clone)]
pub struct FieldGroup {
    pub id: GroupId,
    /// Every control inside the group's container
    pub members: Vec<FieldId>,
    /// Controls that become required while the group is visible
    pub required_members: Vec<FieldId>,
    pub visible: bool,
}

/// The form as the page would render it: an ordered list of fields plus the
/// dependent groups. All lookups return `Option` so a document variant missing
/// a control degrades to "not found" rather than panicking.
#[derive(Debug, Clone)]
pub struct FormDocument {
    fields: Vec<FormField>,
    groups: Vec<FieldGroup>,
}

impl FormDocument {
    pub fn new(fields: Vec<FormField>, groups: Vec<FieldGroup>) -> Self {
        Self { fields, groups }
    }

    /// The signup form document. Field order, labels, and placeholder copy
    /// follow the rendered markup; both dependent groups start hidden until
    /// the dependency rules initialize them.
    pub fn signup() -> Self {
        let fields = vec![
            FormField::text(FieldId::FirstName, "First Name", "First Name", true),
            FormField::text(FieldId::LastName, "Last Name", "Last Name", true),
            FormField::text(FieldId::Email, "Email", "Email", true),
            FormField::text(FieldId::PhoneNumber, "Phone Number", "Phone Number", false),
            FormField::password(FieldId::Password, "Password", "Select a password"),
            FormField::password(
                FieldId::PasswordConfirm,
                "Confirm Password",
                "Confirm your password",
            ),
            FormField::select(
                FieldId::AccountType,
                "Account Type",
                vec![
                    SelectOption::new("ind", "Individual"),
                    SelectOption::new("biz", "Business"),
                ],
                true,
            ),
            FormField::text(
                FieldId::BusinessName,
                "Business Name",
                "Business Name",
                false,
            ),
            FormField::text(FieldId::Address1, "Address Line 1", "Address Line 1", true),
            FormField::text(FieldId::Address2, "Address Line 2", "Address Line 2", false),
            FormField::text(FieldId::City, "City", "City", true),
            FormField::select(FieldId::Country, "Country", country_options(), true),
            FormField::select(FieldId::State, "State", state_options(), false),
            FormField::text(FieldId::ZipCode, "Zip Code", "Zip Code", false),
        ];

        let groups = vec![
            FieldGroup {
                id: GroupId::BusinessFields,
                members: vec![FieldId::BusinessName],
                required_members: vec![FieldId::BusinessName],
                visible: false,
            },
            FieldGroup {
                id: GroupId::StateZipFields,
                members: vec![FieldId::State, FieldId::ZipCode],
                required_members: vec![FieldId::State, FieldId::ZipCode],
                visible: false,
            },
        ];

        Self::new(fields, groups)
    }

    pub fn field(&self, id: FieldId) -> Option<&FormField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.id == id)
    }

    pub fn group(&self, id: GroupId) -> Option<&FieldGroup> {
        self.groups.iter().find(|g| g.id == id)
    }

    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut FieldGroup> {
        self.groups.iter_mut().find(|g| g.id == id)
    }

    /// The group containing a field, if any
    pub fn group_of(&self, id: FieldId) -> Option<&FieldGroup> {
        self.groups.iter().find(|g| g.members.contains(&id))
    }

    /// Whether a field is currently shown (fields outside any group always are)
    pub fn is_field_visible(&self, id: FieldId) -> bool {
        self.group_of(id).map(|g| g.visible).unwrap_or(true)
    }

    /// All field ids in document order
    pub fn field_ids(&self) -> Vec<FieldId> {
        self.fields.iter().map(|f| f.id).collect()
    }

    /// Field ids in document order, skipping fields in hidden groups
    pub fn visible_fields(&self) -> Vec<FieldId> {
        self.fields
            .iter()
            .map(|f| f.id)
            .filter(|id| self.is_field_visible(*id))
            .collect()
    }

    /// Labels of visible required fields that are still empty, in document
    /// order. An empty result means the form would pass the submit check.
    pub fn missing_required(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|f| f.required && f.is_empty() && self.is_field_visible(f.id))
            .map(|f| f.label.clone())
            .collect()
    }

    /// Current value of a field, or empty string when absent
    pub fn value_of(&self, id: FieldId) -> &str {
        self.field(id).map(|f| f.value()).unwrap_or("")
    }
}

/// Country select options; the prompt entry renders as "Country" and submits
/// an empty code. US is the distinguished value for the state/zip rule.
fn country_options() -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", "Country")];
    options.extend(
        COUNTRIES
            .iter()
            .map(|(code, label)| SelectOption::new(code, label)),
    );
    options
}

/// State select options; the prompt entry renders as "State".
fn state_options() -> Vec<SelectOption> {
    let mut options = vec![SelectOption::new("", "State")];
    options.extend(
        US_STATES
            .iter()
            .map(|(code, label)| SelectOption::new(code, label)),
    );
    options
}

/// ISO 3166-1 alpha-2 codes for the country select
const COUNTRIES: &[(&str, &str)] = &[
    ("AR", "Argentina"),
    ("AU", "Australia"),
    ("AT", "Austria"),
    ("BE", "Belgium"),
    ("BR", "Brazil"),
    ("BG", "Bulgaria"),
    ("CA", "Canada"),
    ("CL", "Chile"),
    ("CN", "China"),
    ("CO", "Colombia"),
    ("HR", "Croatia"),
    ("CY", "Cyprus"),
    ("CZ", "Czechia"),
    ("DK", "Denmark"),
    ("EG", "Egypt"),
    ("EE", "Estonia"),
    ("FI", "Finland"),
    ("FR", "France"),
    ("DE", "Germany"),
    ("GR", "Greece"),
    ("HK", "Hong Kong"),
    ("HU", "Hungary"),
    ("IS", "Iceland"),
    ("IN", "India"),
    ("ID", "Indonesia"),
    ("IE", "Ireland"),
    ("IL", "Israel"),
    ("IT", "Italy"),
    ("JP", "Japan"),
    ("KE", "Kenya"),
    ("KR", "Korea, Republic of"),
    ("LV", "Latvia"),
    ("LT", "Lithuania"),
    ("LU", "Luxembourg"),
    ("MY", "Malaysia"),
    ("MT", "Malta"),
    ("MX", "Mexico"),
    ("NL", "Netherlands"),
    ("NZ", "New Zealand"),
    ("NG", "Nigeria"),
    ("NO", "Norway"),
    ("PK", "Pakistan"),
    ("PE", "Peru"),
    ("PH", "Philippines"),
    ("PL", "Poland"),
    ("PT", "Portugal"),
    ("RO", "Romania"),
    ("SA", "Saudi Arabia"),
    ("SG", "Singapore"),
    ("SK", "Slovakia"),
    ("SI", "Slovenia"),
    ("ZA", "South Africa"),
    ("ES", "Spain"),
    ("SE", "Sweden"),
    ("CH", "Switzerland"),
    ("TW", "Taiwan"),
    ("TH", "Thailand"),
    ("TR", "Turkey"),
    ("UA", "Ukraine"),
    ("AE", "United Arab Emirates"),
    ("GB", "United Kingdom"),
    ("US", "United States"),
    ("UY", "Uruguay"),
    ("VN", "Vietnam"),
];

/// USPS state codes: 50 states plus DC
const US_STATES: &[(&str, &str)] = &[
    ("AL", "Alabama"),
    ("AK", "Alaska"),
    ("AZ", "Arizona"),
    ("AR", "Arkansas"),
    ("CA", "California"),
    ("CO", "Colorado"),
    ("CT", "Connecticut"),
    ("DE", "Delaware"),
    ("DC", "District of Columbia"),
    ("FL", "Florida"),
    ("GA", "Georgia"),
    ("HI", "Hawaii"),
    ("ID", "Idaho"),
    ("IL", "Illinois"),
    ("IN", "Indiana"),
    ("IA", "Iowa"),
    ("KS", "Kansas"),
    ("KY", "Kentucky"),
    ("LA", "Louisiana"),
    ("ME", "Maine"),
    ("MD", "Maryland"),
    ("MA", "Massachusetts"),
    ("MI", "Michigan"),
    ("MN", "Minnesota"),
    ("MS", "Mississippi"),
    ("MO", "Missouri"),
    ("MT", "Montana"),
    ("NE", "Nebraska"),
    ("NV", "Nevada"),
    ("NH", "New Hampshire"),
    ("NJ", "New Jersey"),
    ("NM", "New Mexico"),
    ("NY", "New York"),
    ("NC", "North Carolina"),
    ("ND", "North Dakota"),
    ("OH", "Ohio"),
    ("OK", "Oklahoma"),
    ("OR", "Oregon"),
    ("PA", "Pennsylvania"),
    ("RI", "Rhode Island"),
    ("SC", "South Carolina"),
    ("SD", "South Dakota"),
    ("TN", "Tennessee"),
    ("TX", "Texas"),
    ("UT", "Utah"),
    ("VT", "Vermont"),
    ("VA", "Virginia"),
    ("WA", "Washington"),
    ("WV", "West Virginia"),
    ("WI", "Wisconsin"),
    ("WY", "Wyoming"),
];
