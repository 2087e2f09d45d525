//! Welcome popup content.

/// What a slide's button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideAction {
    /// "Next" button jumping to the given slide
    Next { target: usize, label: &'static str },
    /// Terminal call-to-action link
    CallToAction { href: &'static str, label: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub icon: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub action: SlideAction,
}

pub const WELCOME_SLIDES: [Slide; 4] = [
    Slide {
        icon: "🎯",
        title: "Our Mission",
        body: "Transform your business data into profitable insights. We make enterprise-level analytics accessible for small businesses.",
        action: SlideAction::Next {
            target: 1,
            label: "Next →",
        },
    },
    Slide {
        icon: "💡",
        title: "What We Offer",
        body: "Custom dashboards, predictive analytics, data automation, and actionable business intelligence tailored to your needs.",
        action: SlideAction::Next {
            target: 2,
            label: "Next →",
        },
    },
    Slide {
        icon: "📈",
        title: "How We Help",
        body: "Increase profits by 25%, reduce manual work by 60%, and make data-driven decisions that drive real growth.",
        action: SlideAction::Next {
            target: 3,
            label: "Next →",
        },
    },
    Slide {
        icon: "🚀",
        title: "Ready to Start?",
        body: "Ready to make data-driven decisions for your business? Get your professional consultation today.",
        action: SlideAction::CallToAction {
            href: "index.html",
            label: "Get Started Now",
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_buttons_point_forward_and_in_range() {
        for (index, slide) in WELCOME_SLIDES.iter().enumerate() {
            if let SlideAction::Next { target, .. } = slide.action {
                assert_eq!(target, index + 1);
                assert!(target < WELCOME_SLIDES.len());
            }
        }
    }

    #[test]
    fn only_last_slide_has_call_to_action() {
        let last = WELCOME_SLIDES.len() - 1;
        for (index, slide) in WELCOME_SLIDES.iter().enumerate() {
            let is_cta = matches!(slide.action, SlideAction::CallToAction { .. });
            assert_eq!(is_cta, index == last, "slide {}", index);
        }
    }
}
