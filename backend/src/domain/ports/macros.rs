//! Helper macro for repository error enums.
//!
//! Each variant carries named fields and gets a snake_case constructor whose
//! parameters accept anything convertible into the field type, so adapters can
//! write `UserPersistenceError::query("timeout")`.

macro_rules! define_port_error {
    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),* $(,)? } => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field : $ty),* },
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum StoreError {
            Unreachable { message: String } => "store unreachable: {message}",
            Rejected { message: String, attempts: u32 } => "store rejected {attempts}x: {message}",
        }
    }

    #[test]
    fn constructors_accept_str_for_string_fields() {
        let err = StoreError::unreachable("refused");
        assert_eq!(err, StoreError::Unreachable { message: "refused".to_owned() });
        assert_eq!(err.to_string(), "store unreachable: refused");
    }

    #[test]
    fn constructors_keep_field_order() {
        let err = StoreError::rejected("busy", 3_u32);
        assert_eq!(err.to_string(), "store rejected 3x: busy");
    }
}
