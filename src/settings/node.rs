use super::{Setting, ValueType};

/// Whether a schema member is a leaf or a nested group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// A typed leaf setting.
    Leaf(ValueType),
    /// A nested settings node.
    Group,
}

/// One entry of a node's static schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Member {
    /// Attribute name, as used in dotted paths.
    pub name: &'static str,
    /// Leaf or group.
    pub kind: MemberKind,
}

impl Member {
    /// Schema entry for a leaf.
    pub const fn leaf(name: &'static str, value_type: ValueType) -> Self {
        Self {
            name,
            kind: MemberKind::Leaf(value_type),
        }
    }

    /// Schema entry for a nested group.
    pub const fn group(name: &'static str) -> Self {
        Self {
            name,
            kind: MemberKind::Group,
        }
    }
}

/// Introspection surface of a node in the settings tree.
///
/// Implementations are normally generated by [`settings_group!`](crate::settings_group),
/// which keeps the schema returned by [`members`](SettingsNode::members) and
/// the accessors in sync.
pub trait SettingsNode: Send + Sync {
    /// Leaves and groups in declaration order.
    fn members(&self) -> &'static [Member];

    /// Leaf by attribute name.
    fn setting(&self, name: &str) -> Option<&Setting>;

    /// Mutable leaf by attribute name.
    fn setting_mut(&mut self, name: &str) -> Option<&mut Setting>;

    /// Child group by attribute name.
    fn group(&self, name: &str) -> Option<&dyn SettingsNode>;

    /// Mutable child group by attribute name.
    fn group_mut(&mut self, name: &str) -> Option<&mut dyn SettingsNode>;

    /// Declared type of the leaf `name`, `None` for groups and unknown names.
    fn declared_type(&self, name: &str) -> Option<ValueType> {
        self.members().iter().find_map(|member| match member.kind {
            MemberKind::Leaf(value_type) if member.name == name => Some(value_type),
            _ => None,
        })
    }

    /// Leaf names, sorted.
    fn leaf_names(&self) -> Vec<&'static str> {
        sorted_names(self.members(), |kind| matches!(kind, MemberKind::Leaf(_)))
    }

    /// Group names, sorted.
    fn group_names(&self) -> Vec<&'static str> {
        sorted_names(self.members(), |kind| matches!(kind, MemberKind::Group))
    }
}

fn sorted_names(members: &[Member], keep: impl Fn(MemberKind) -> bool) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = members
        .iter()
        .filter(|member| keep(member.kind))
        .map(|member| member.name)
        .collect();
    names.sort_unstable();
    names
}

/// Declares a settings node type together with its schema.
///
/// Every leaf becomes a public [`Setting`] field starting at its default, every
/// group becomes a public field of the nested node type. The generated
/// [`SettingsNode`] implementation exposes both by attribute name.
///
/// # Example
/// ```ignore
/// settings_group! {
///     /// Media port settings.
///     pub struct RtpSettings {
///         leaves: {
///             port_range: PortRange = Some(SettingValue::PortRange(PortRange { low: 50000, high: 50500 })),
///         },
///         groups: {},
///     }
/// }
/// ```
#[macro_export]
macro_rules! settings_group {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            leaves: { $( $(#[$leaf_meta:meta])* $leaf:ident : $value_type:ident = $default:expr ),* $(,)? },
            groups: { $( $(#[$group_meta:meta])* $group:ident : $group_type:ident ),* $(,)? } $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis struct $name {
            $( $(#[$leaf_meta])* pub $leaf: $crate::settings::Setting, )*
            $( $(#[$group_meta])* pub $group: $group_type, )*
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $( $leaf: $crate::settings::Setting::new(
                        $crate::settings::ValueType::$value_type,
                        $default,
                    ), )*
                    $( $group: <$group_type>::default(), )*
                }
            }
        }

        #[allow(unused_variables)]
        impl $crate::settings::SettingsNode for $name {
            fn members(&self) -> &'static [$crate::settings::Member] {
                const MEMBERS: &[$crate::settings::Member] = &[
                    $( $crate::settings::Member::leaf(
                        stringify!($leaf),
                        $crate::settings::ValueType::$value_type,
                    ), )*
                    $( $crate::settings::Member::group(stringify!($group)), )*
                ];
                MEMBERS
            }

            fn setting(&self, name: &str) -> Option<&$crate::settings::Setting> {
                $( if name == stringify!($leaf) { return Some(&self.$leaf); } )*
                None
            }

            fn setting_mut(&mut self, name: &str) -> Option<&mut $crate::settings::Setting> {
                $( if name == stringify!($leaf) { return Some(&mut self.$leaf); } )*
                None
            }

            fn group(&self, name: &str) -> Option<&dyn $crate::settings::SettingsNode> {
                $( if name == stringify!($group) { return Some(&self.$group); } )*
                None
            }

            fn group_mut(&mut self, name: &str) -> Option<&mut dyn $crate::settings::SettingsNode> {
                $( if name == stringify!($group) { return Some(&mut self.$group); } )*
                None
            }
        }
    };
}
