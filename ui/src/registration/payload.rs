//! Request bodies built from the wizard state.
//!
//! One construction function per role keeps field presence decided by the
//! type instead of by conditionals.

use crate::registration::types::*;
use crate::services::client::{AuthRequest, LoginRequest, RegisterRequest, RegistrationProfile};

/// Splits comma-separated specialties, trimming and dropping empty entries
pub fn parse_specialties(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

fn migrant_profile(categories: &CategorySelection) -> RegistrationProfile {
    RegistrationProfile::Migrant {
        need_categories: categories.codes().to_vec(),
    }
}

fn helper_profile(categories: &CategorySelection) -> RegistrationProfile {
    RegistrationProfile::Helper {
        help_categories: categories.codes().to_vec(),
    }
}

fn volunteer_profile(profile: &ProfessionalProfile) -> RegistrationProfile {
    RegistrationProfile::Volunteer {
        professional_area: profile.area,
        professional_specialties: parse_specialties(&profile.specialties),
        availability: profile.availability.clone(),
        experience: profile.experience.clone(),
    }
}

impl WizardState {
    /// Role-specific part of the registration body
    pub fn registration_profile(&self) -> RegistrationProfile {
        match self.role {
            Role::Migrant => migrant_profile(&self.categories),
            Role::Helper => helper_profile(&self.categories),
            Role::Volunteer => volunteer_profile(&self.profile),
        }
    }

    /// Exact request body for the active mode and role.
    ///
    /// Email and name are sent trimmed, the password as typed.
    pub fn build_payload(&self) -> AuthRequest {
        let credentials = &self.credentials;
        let email = credentials.email.trim().to_string();

        match self.mode {
            Mode::Login => AuthRequest::Login(LoginRequest {
                email,
                password: credentials.password.clone(),
            }),
            Mode::Register => AuthRequest::Register(RegisterRequest {
                email,
                password: credentials.password.clone(),
                name: credentials.name.trim().to_string(),
                languages: self.languages.clone(),
                profile: self.registration_profile(),
            }),
        }
    }
}
