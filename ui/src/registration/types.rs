// Core types for the registration wizard - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::services::client::{AuthResponse, UserRecord};
use crate::services::config::ClientConfig;
use crate::services::errors::RegistrationError;

/// Whether the wizard signs an existing account in or creates a new one
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    Login,
    Register,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Login => Mode::Register,
            Mode::Register => Mode::Login,
        }
    }
}

/// Account role chosen during registration
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Migrant,
    Helper,
    Volunteer,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Migrant, Role::Helper, Role::Volunteer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Migrant => "migrant",
            Role::Helper => "helper",
            Role::Volunteer => "volunteer",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Migrant => "I need help",
            Role::Helper => "I want to help",
            Role::Volunteer => "🤝 Volunteer",
        }
    }

    /// Role name shown on the profile page
    pub fn title(&self) -> &'static str {
        match self {
            Role::Migrant => "Migrant",
            Role::Helper => "Helper",
            Role::Volunteer => "Volunteer",
        }
    }

    /// Categories this role picks from on step 2, `None` when the role skips that step
    pub fn category_catalog(&self) -> Option<&'static [CategoryCode]> {
        match self {
            Role::Migrant | Role::Helper => Some(CategoryCode::CATALOG),
            Role::Volunteer => None,
        }
    }

    pub fn requires_categories(&self) -> bool {
        self.category_catalog().is_some()
    }

    /// Heading shown above the category grid
    pub fn category_prompt(&self) -> &'static str {
        match self {
            Role::Migrant => "What do you need help with?",
            Role::Helper => "Which areas can you help with?",
            Role::Volunteer => "",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = RegistrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| RegistrationError::UnknownCode {
                kind: "role",
                value: s.to_string(),
            })
    }
}

/// Assistance domains shared by migrant needs and helper offers
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryCode {
    Food,
    Legal,
    Health,
    Housing,
    Work,
    Education,
    Social,
    Clothes,
    Furniture,
    Transport,
}

impl CategoryCode {
    pub const ALL: [CategoryCode; 10] = [
        CategoryCode::Food,
        CategoryCode::Legal,
        CategoryCode::Health,
        CategoryCode::Housing,
        CategoryCode::Work,
        CategoryCode::Education,
        CategoryCode::Social,
        CategoryCode::Clothes,
        CategoryCode::Furniture,
        CategoryCode::Transport,
    ];

    pub const CATALOG: &'static [CategoryCode] = &CategoryCode::ALL;

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryCode::Food => "food",
            CategoryCode::Legal => "legal",
            CategoryCode::Health => "health",
            CategoryCode::Housing => "housing",
            CategoryCode::Work => "work",
            CategoryCode::Education => "education",
            CategoryCode::Social => "social",
            CategoryCode::Clothes => "clothes",
            CategoryCode::Furniture => "furniture",
            CategoryCode::Transport => "transport",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryCode::Food => "Food",
            CategoryCode::Legal => "Legal",
            CategoryCode::Health => "Health",
            CategoryCode::Housing => "Housing",
            CategoryCode::Work => "Work",
            CategoryCode::Education => "Education",
            CategoryCode::Social => "Social",
            CategoryCode::Clothes => "Clothes",
            CategoryCode::Furniture => "Furniture",
            CategoryCode::Transport => "Transport",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CategoryCode::Food => "🍽️",
            CategoryCode::Legal => "⚖️",
            CategoryCode::Health => "🏥",
            CategoryCode::Housing => "🏠",
            CategoryCode::Work => "💼",
            CategoryCode::Education => "📚",
            CategoryCode::Social => "🤝",
            CategoryCode::Clothes => "👕",
            CategoryCode::Furniture => "🪑",
            CategoryCode::Transport => "🚌",
        }
    }
}

impl FromStr for CategoryCode {
    type Err = RegistrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| RegistrationError::UnknownCode {
                kind: "category",
                value: s.to_string(),
            })
    }
}

/// Professional area of a credentialed volunteer
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfessionalArea {
    #[default]
    Legal,
    Health,
    Education,
    Translation,
    Family,
    Employment,
    Housing,
    Administration,
    Finance,
    Technology,
}

impl ProfessionalArea {
    pub const ALL: [ProfessionalArea; 10] = [
        ProfessionalArea::Legal,
        ProfessionalArea::Health,
        ProfessionalArea::Education,
        ProfessionalArea::Translation,
        ProfessionalArea::Family,
        ProfessionalArea::Employment,
        ProfessionalArea::Housing,
        ProfessionalArea::Administration,
        ProfessionalArea::Finance,
        ProfessionalArea::Technology,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfessionalArea::Legal => "legal",
            ProfessionalArea::Health => "health",
            ProfessionalArea::Education => "education",
            ProfessionalArea::Translation => "translation",
            ProfessionalArea::Family => "family",
            ProfessionalArea::Employment => "employment",
            ProfessionalArea::Housing => "housing",
            ProfessionalArea::Administration => "administration",
            ProfessionalArea::Finance => "finance",
            ProfessionalArea::Technology => "technology",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProfessionalArea::Legal => "Legal",
            ProfessionalArea::Health => "Health",
            ProfessionalArea::Education => "Education",
            ProfessionalArea::Translation => "Translation",
            ProfessionalArea::Family => "Family and Social",
            ProfessionalArea::Employment => "Career Guidance",
            ProfessionalArea::Housing => "Housing",
            ProfessionalArea::Administration => "Administration",
            ProfessionalArea::Finance => "Finance",
            ProfessionalArea::Technology => "Technology",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ProfessionalArea::Legal => "⚖️",
            ProfessionalArea::Health => "🏥",
            ProfessionalArea::Education => "📚",
            ProfessionalArea::Translation => "🌍",
            ProfessionalArea::Family => "👨‍👩‍👧",
            ProfessionalArea::Employment => "💼",
            ProfessionalArea::Housing => "🏠",
            ProfessionalArea::Administration => "📋",
            ProfessionalArea::Finance => "💰",
            ProfessionalArea::Technology => "💻",
        }
    }
}

impl FromStr for ProfessionalArea {
    type Err = RegistrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProfessionalArea::ALL
            .into_iter()
            .find(|area| area.as_str() == s)
            .ok_or_else(|| RegistrationError::UnknownCode {
                kind: "professional area",
                value: s.to_string(),
            })
    }
}

// Form state structs
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// Volunteer-only fields, kept as typed text until the payload is built
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfessionalProfile {
    pub area: ProfessionalArea,
    pub specialties: String,
    pub availability: String,
    pub experience: String,
}

/// Deduplicated set of category codes that remembers toggle order
#[derive(Clone, Debug, Default)]
pub struct CategorySelection {
    codes: Vec<CategoryCode>,
}

impl CategorySelection {
    pub fn contains(&self, code: CategoryCode) -> bool {
        self.codes.contains(&code)
    }

    /// Adds the code if absent, removes it if present
    pub fn toggle(&mut self, code: CategoryCode) {
        if self.contains(code) {
            self.codes.retain(|existing| *existing != code);
        } else {
            self.codes.push(code);
        }
    }

    pub fn clear(&mut self) {
        self.codes.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Codes in the order they were selected
    pub fn codes(&self) -> &[CategoryCode] {
        &self.codes
    }
}

// Order is irrelevant for equality.
impl PartialEq for CategorySelection {
    fn eq(&self, other: &Self) -> bool {
        self.codes.len() == other.codes.len()
            && self.codes.iter().all(|code| other.contains(*code))
    }
}

impl Eq for CategorySelection {}

impl FromIterator<CategoryCode> for CategorySelection {
    fn from_iter<I: IntoIterator<Item = CategoryCode>>(iter: I) -> Self {
        let mut selection = CategorySelection::default();
        for code in iter {
            if !selection.contains(code) {
                selection.codes.push(code);
            }
        }
        selection
    }
}

// Form step management
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WizardStep {
    BasicInfo,
    Categories,
}

impl WizardStep {
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::Categories => 2,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message shown after a submission attempt
#[derive(Clone, PartialEq, Debug)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum WizardAction {
    SetMode(Mode),
    ToggleMode,

    // Step 1 actions
    SetEmail(String),
    SetPassword(String),
    SetName(String),
    SelectRole(Role),

    // Volunteer profile actions
    SetProfessionalArea(ProfessionalArea),
    SetSpecialties(String),
    SetAvailability(String),
    SetExperience(String),

    // Step 2 actions
    ToggleCategory(CategoryCode),

    // Submission
    SubmissionFinished(Result<AuthResponse, RegistrationError>),
    DismissNotice,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WizardState {
    pub mode: Mode,
    pub current_step: WizardStep,
    pub role: Role,
    pub credentials: Credentials,
    pub categories: CategorySelection,
    pub profile: ProfessionalProfile,
    pub languages: Vec<String>,
    pub submission_in_flight: bool,
    pub validation_error: Option<RegistrationError>,
    pub notice: Option<Notice>,
    pub authenticated_user: Option<UserRecord>,
}

impl WizardState {
    /// Fresh wizard state, optionally with a role picked before entry.
    ///
    /// Registration languages come from `config`.
    pub fn for_entry(initial_role: Option<Role>, config: &ClientConfig) -> Self {
        let mut state = Self::default();
        state.languages = config.default_languages.clone();
        if let Some(role) = initial_role {
            state.role = role;
            state.mode = Mode::Register;
        }
        state
    }

    pub fn step_number(&self) -> u8 {
        self.current_step.number()
    }

    pub fn is_register(&self) -> bool {
        self.mode == Mode::Register
    }

    /// Category catalog for the current role, only while registering
    pub fn active_catalog(&self) -> Option<&'static [CategoryCode]> {
        if self.is_register() {
            self.role.category_catalog()
        } else {
            None
        }
    }

    pub fn should_show_profile(&self) -> bool {
        self.is_register()
            && self.role == Role::Volunteer
            && self.current_step == WizardStep::BasicInfo
    }

    pub fn should_show_categories(&self) -> bool {
        self.current_step == WizardStep::Categories
    }

    /// Switches between login and register, keeping typed credentials
    pub fn set_mode(&mut self, mode: Mode) {
        debug!("Wizard mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        self.current_step = WizardStep::BasicInfo;
        self.validation_error = None;
        self.categories.clear();
    }

    /// A different role clears categories and returns to step 1
    pub fn select_role(&mut self, role: Role) {
        if self.role != role {
            debug!(
                "Role changed {} -> {}, clearing {} selected categories",
                self.role,
                role,
                self.categories.len()
            );
            self.categories.clear();
            self.current_step = WizardStep::BasicInfo;
            self.validation_error = None;
        }
        self.role = role;
    }

    /// Symmetric-difference update; ignored when the role has no catalog
    pub fn toggle_category(&mut self, code: CategoryCode) {
        match self.active_catalog() {
            Some(catalog) if catalog.contains(&code) => {
                self.categories.toggle(code);
                if !self.categories.is_empty()
                    && self.validation_error == Some(RegistrationError::EmptyCategories)
                {
                    self.validation_error = None;
                }
            }
            _ => debug!("Ignoring category {:?} outside the active catalog", code),
        }
    }

    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: WizardAction) {
        match action {
            WizardAction::SetMode(mode) => self.set_mode(mode),
            WizardAction::ToggleMode => self.set_mode(self.mode.toggled()),

            WizardAction::SetEmail(email) => {
                self.credentials.email = email;
            }
            WizardAction::SetPassword(password) => {
                self.credentials.password = password;
            }
            WizardAction::SetName(name) => {
                self.credentials.name = name;
            }
            WizardAction::SelectRole(role) => self.select_role(role),

            WizardAction::SetProfessionalArea(area) => {
                self.profile.area = area;
            }
            WizardAction::SetSpecialties(specialties) => {
                self.profile.specialties = specialties;
            }
            WizardAction::SetAvailability(availability) => {
                self.profile.availability = availability;
            }
            WizardAction::SetExperience(experience) => {
                self.profile.experience = experience;
            }

            WizardAction::ToggleCategory(code) => self.toggle_category(code),

            WizardAction::SubmissionFinished(result) => self.finish_submission(&result),
            WizardAction::DismissNotice => {
                self.notice = None;
            }
        }
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self {
            mode: Mode::Login,
            current_step: WizardStep::BasicInfo,
            role: Role::Migrant,
            credentials: Credentials::default(),
            categories: CategorySelection::default(),
            profile: ProfessionalProfile::default(),
            languages: ClientConfig::default().default_languages,
            submission_in_flight: false,
            validation_error: None,
            notice: None,
            authenticated_user: None,
        }
    }
}
