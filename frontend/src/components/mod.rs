mod welcome_popup;

pub use welcome_popup::WelcomePopup;
