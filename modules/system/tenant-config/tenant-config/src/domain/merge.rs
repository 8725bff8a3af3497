//! Config merger: field-level merge and client-safe projection.
//!
//! Each configuration type declares a static field table through
//! `config_schema!`. Both operations walk that table, so the merge rule and
//! the sensitivity split live in one place per type:
//!
//! - [`merge_into`] patches a base with every present field of an update,
//!   recursing into nested objects field by field.
//! - [`project_non_sensitive`] copies only `Public` fields, recursing into
//!   public nested objects so their own sensitive fields stay behind.

use tenant_config_sdk::{BrandConfiguration, LicenseConfiguration, TenantConfiguration};

/// Whether a field may be returned to a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensitivity {
    Public,
    Sensitive,
}

/// One entry of a configuration type's field table.
pub struct FieldRule<T> {
    pub name: &'static str,
    pub sensitivity: Sensitivity,
    merge: fn(&mut T, &T),
    project: fn(&mut T, &T),
    is_set: fn(&T) -> bool,
}

impl<T> FieldRule<T> {
    /// Applies this rule alone: copies the field from `update` into `base`
    /// when present.
    pub fn merge_field(&self, base: &mut T, update: &T) {
        (self.merge)(base, update);
    }
}

/// Configuration types that can be merged and projected.
pub trait ConfigSchema: Default + 'static {
    fn fields() -> &'static [FieldRule<Self>];
}

/// Generates the `ConfigSchema` field table for a configuration struct.
///
/// `leaf` fields are `Option<V: Clone>` and are overwritten as a whole;
/// `nested` fields are `Option<N: ConfigSchema>` and are merged recursively.
macro_rules! config_schema {
    (@rule leaf, $ty:ty, $field:ident, $sensitivity:ident) => {
        FieldRule {
            name: stringify!($field),
            sensitivity: Sensitivity::$sensitivity,
            merge: |base: &mut $ty, update: &$ty| {
                if let Some(value) = &update.$field {
                    base.$field = Some(value.clone());
                }
            },
            project: |out: &mut $ty, source: &$ty| out.$field.clone_from(&source.$field),
            is_set: |cfg: &$ty| cfg.$field.is_some(),
        }
    };
    (@rule nested, $ty:ty, $field:ident, $sensitivity:ident) => {
        FieldRule {
            name: stringify!($field),
            sensitivity: Sensitivity::$sensitivity,
            merge: |base: &mut $ty, update: &$ty| {
                if let Some(value) = &update.$field {
                    merge_into(value, base.$field.get_or_insert_with(Default::default));
                }
            },
            project: |out: &mut $ty, source: &$ty| {
                out.$field = source
                    .$field
                    .as_ref()
                    .map(|nested| project_non_sensitive(Some(nested)));
            },
            is_set: |cfg: &$ty| cfg.$field.is_some(),
        }
    };
    ($ty:ty { $($kind:ident $field:ident: $sensitivity:ident),* $(,)? }) => {
        impl ConfigSchema for $ty {
            fn fields() -> &'static [FieldRule<Self>] {
                const RULES: &[FieldRule<$ty>] = &[
                    $(config_schema!(@rule $kind, $ty, $field, $sensitivity)),*
                ];
                RULES
            }
        }
    };
}

config_schema!(TenantConfiguration {
    leaf google_maps_key: Public,
    leaf third_party_auths: Public,
    leaf is_form_login_enabled: Public,
    leaf instance_name: Public,
    leaf email_verification_enabled: Public,
    nested brand: Public,
    nested license: Sensitive,
    leaf smtp_password: Sensitive,
});

config_schema!(BrandConfiguration {
    leaf primary_color: Public,
    leaf logo_url: Public,
    leaf favicon_url: Public,
});

config_schema!(LicenseConfiguration {
    leaf key: Sensitive,
    leaf plan: Public,
    leaf active: Public,
});

/// Patches `base` with every field present in `update` and returns it.
///
/// Absent fields of `update` leave `base` untouched; nested objects are
/// merged field by field rather than replaced.
pub fn merge_into<'a, T: ConfigSchema>(update: &T, base: &'a mut T) -> &'a mut T {
    for rule in T::fields() {
        rule.merge_field(base, update);
    }
    base
}

/// Builds a configuration holding only the public fields of `source`.
///
/// `None` yields an empty configuration.
#[must_use]
pub fn project_non_sensitive<T: ConfigSchema>(source: Option<&T>) -> T {
    let mut out = T::default();
    if let Some(source) = source {
        for rule in T::fields()
            .iter()
            .filter(|rule| rule.sensitivity == Sensitivity::Public)
        {
            (rule.project)(&mut out, source);
        }
    }
    out
}

/// Names of the top-level fields present in `cfg`.
#[must_use]
pub fn set_field_names<T: ConfigSchema>(cfg: &T) -> Vec<&'static str> {
    T::fields()
        .iter()
        .filter(|rule| (rule.is_set)(cfg))
        .map(|rule| rule.name)
        .collect()
}
