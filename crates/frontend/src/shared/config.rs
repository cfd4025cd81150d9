//! App-wide constants: name, tagline, version. One place to touch when
//! rebranding.

pub struct AppConfig {
    pub name: &'static str,
    pub tagline: &'static str,
    pub version: &'static str,
    pub description: &'static str,
}

pub const APP_CONFIG: AppConfig = AppConfig {
    name: "EduPro",
    tagline: "Empowering minds through innovative learning",
    version: "1.0.0",
    description: "Professional e-learning platform for modern education",
};
