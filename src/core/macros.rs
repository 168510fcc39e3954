//! Macros for declaring onboarding step catalogs.

/// Generate a step enum with its `Step` impl and canonical catalog order.
///
/// Variant declaration order is the canonical forward-navigation order;
/// the string after each variant is its stable persistence key.
///
/// # Example
///
/// ```
/// use intake::step_enum;
///
/// step_enum! {
///     pub enum Signup {
///         Welcome => "welcome",
///         Email => "emailEntry",
///         Done => "done",
///     }
///     terminal: [Done]
/// }
///
/// use intake::core::Step;
/// assert_eq!(Signup::Email.key(), "emailEntry");
/// assert!(Signup::Done.is_terminal());
/// assert_eq!(Signup::catalog().len(), 3);
/// ```
#[macro_export]
macro_rules! step_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $key:literal
            ),* $(,)?
        }

        $(terminal: [$($terminal:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Step for $name {
            fn key(&self) -> &str {
                match self {
                    $(Self::$variant => $key),*
                }
            }

            fn is_terminal(&self) -> bool {
                match self {
                    $($(Self::$terminal => true,)*)?
                    _ => false,
                }
            }
        }

        impl $name {
            /// All steps in canonical forward order.
            pub fn catalog() -> Vec<Self> {
                vec![$(Self::$variant),*]
            }
        }
    };
}
