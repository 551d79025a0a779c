use super::*;

mod default {
    use super::*;

    #[test]
    fn when_constructed_should_use_expected_defaults() {
        // Arrange & Act
        let options = GuardOptions::default();

        // Assert
        assert_eq!(options.protected_route, "/contact-form-7/v1/");
        assert_eq!(options.matching, OriginMatching::Contains);
    }

    #[test]
    fn when_mutated_instance_should_not_affect_other_defaults() {
        // Arrange
        let mut first = GuardOptions::default();
        let second = GuardOptions::default();

        // Act
        first.matching = OriginMatching::ExactHost;

        // Assert
        assert_ne!(first.matching, second.matching);
    }
}

mod validate {
    use super::*;

    #[test]
    fn when_defaults_should_return_ok() {
        // Arrange
        let options = GuardOptions::default();

        // Act
        let result = options.validate();

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    fn when_protected_route_empty_should_return_error() {
        // Arrange
        let options = GuardOptions {
            protected_route: String::new(),
            ..GuardOptions::default()
        };

        // Act
        let result = options.validate();

        // Assert
        assert_eq!(result, Err(ValidationError::EmptyProtectedRoute));
    }

    #[test]
    fn when_protected_route_whitespace_should_return_error() {
        // Arrange
        let options = GuardOptions {
            protected_route: "   ".into(),
            ..GuardOptions::default()
        };

        // Act
        let result = options.validate();

        // Assert
        assert_eq!(result, Err(ValidationError::EmptyProtectedRoute));
    }

    #[test]
    fn when_custom_route_should_return_ok() {
        // Arrange
        let options = GuardOptions {
            protected_route: "/my-forms/v2/".into(),
            ..GuardOptions::default()
        };

        // Act
        let result = options.validate();

        // Assert
        assert!(result.is_ok());
    }
}
