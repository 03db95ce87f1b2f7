use crate::error::{LogoError, Result};
use crate::models::LogoRequest;

/// Render a logo request into the design prompt sent to the image service.
///
/// Pure and deterministic: the same request always produces the same string,
/// byte for byte. The brand name must be non-empty after trimming; nothing is
/// ever dispatched for an invalid request.
pub fn build_prompt(request: &LogoRequest) -> Result<String> {
    let brand = request.brand_name.trim();
    if brand.is_empty() {
        return Err(LogoError::InvalidInput(
            "brand name must not be empty".into(),
        ));
    }

    let mut prompt = format!(
        "Design request: corporate logo design\n\
         Brand: {}\n\
         Style: {}\n\
         \n\
         Core requirements:\n\
         - a {} logo design in vector style\n\
         - {} color palette\n",
        brand,
        request.style.description(),
        request.complexity.phrase(),
        request.color_scheme.palette(),
    );

    if let Some(industry) = request.industry {
        prompt.push_str(&format!(
            "- a design suited to the {} industry\n",
            industry.phrase()
        ));
    }

    prompt.push_str(&format!("- {} symbol mark\n", request.icon_type.phrase()));

    if let Some(feature) = &request.additional_feature {
        let feature = feature.trim();
        if !feature.is_empty() {
            prompt.push_str(&format!("- {}\n", feature));
        }
    }

    prompt.push_str(
        "\nAdditional guidance:\n\
         - keep the logo a simple, scalable vector form\n\
         - pure white background\n\
         - symbol and logotype arranged in harmony\n\
         - recognizable even at small sizes\n\
         - suitable for a professional, modern corporate identity",
    );

    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ColorScheme, Complexity, IconType, Industry, LogoStyle};

    fn sample_request() -> LogoRequest {
        LogoRequest::new(
            "Techno Labs",
            LogoStyle::Tech,
            ColorScheme::Business,
            IconType::Geometric,
            Complexity::Minimal,
        )
    }

    #[test]
    fn prompt_contains_brand_name_verbatim() {
        let prompt = build_prompt(&sample_request()).unwrap();
        assert!(!prompt.is_empty());
        assert!(prompt.contains("Techno Labs"));
        assert!(prompt.contains(LogoStyle::Tech.description()));
        assert!(prompt.contains(ColorScheme::Business.palette()));
    }

    #[test]
    fn prompt_is_deterministic() {
        let request = sample_request()
            .with_industry(Industry::Technology)
            .with_additional_feature("hexagonal badge");
        assert_eq!(
            build_prompt(&request).unwrap(),
            build_prompt(&request).unwrap()
        );
    }

    #[test]
    fn empty_brand_name_is_invalid_input() {
        let mut request = sample_request();
        request.brand_name = "   ".to_string();
        let err = build_prompt(&request).unwrap_err();
        assert!(matches!(err, LogoError::InvalidInput(_)));
    }

    #[test]
    fn industry_line_only_present_when_set() {
        let without = build_prompt(&sample_request()).unwrap();
        assert!(!without.contains("industry"));

        let with = build_prompt(&sample_request().with_industry(Industry::Media)).unwrap();
        assert!(with.contains("suited to the media and entertainment industry"));
    }

    #[test]
    fn blank_additional_feature_is_ignored() {
        let blank = build_prompt(&sample_request().with_additional_feature("  ")).unwrap();
        assert_eq!(blank, build_prompt(&sample_request()).unwrap());

        let set = build_prompt(&sample_request().with_additional_feature("circuit motif")).unwrap();
        assert!(set.contains("- circuit motif\n"));
    }
}
