//! Role-gated dashboard menu.
//!
//! Visibility is a pure function of [`Role`], evaluated independently per
//! entry. This is advisory gating for the UI only; the backend authorizes
//! every endpoint on its own.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::state::session::Role;

/// Entries of the dashboard sidebar, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    Home,
    Map,
    Clients,
    Orders,
    Vehicles,
    Drivers,
    Addresses,
    Reports,
    Roles,
    Users,
    Audit,
}

impl MenuEntry {
    pub const ALL: [Self; 11] = [
        Self::Home,
        Self::Map,
        Self::Clients,
        Self::Orders,
        Self::Vehicles,
        Self::Drivers,
        Self::Addresses,
        Self::Reports,
        Self::Roles,
        Self::Users,
        Self::Audit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Inicio",
            Self::Map => "Mapa",
            Self::Clients => "Clientes",
            Self::Orders => "Pedidos",
            Self::Vehicles => "Vehículos",
            Self::Drivers => "Conductores",
            Self::Addresses => "Direcciones",
            Self::Reports => "Reportes",
            Self::Roles => "Roles",
            Self::Users => "Usuarios",
            Self::Audit => "Auditoría",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/dashboard/inicio",
            Self::Map => "/dashboard/mapa",
            Self::Clients => "/dashboard/clientes",
            Self::Orders => "/dashboard/pedidos",
            Self::Vehicles => "/dashboard/vehiculos",
            Self::Drivers => "/dashboard/conductores",
            Self::Addresses => "/dashboard/direcciones",
            Self::Reports => "/dashboard/reportes",
            Self::Roles => "/dashboard/roles",
            Self::Users => "/dashboard/usuarios",
            Self::Audit => "/dashboard/auditoria",
        }
    }

    /// Whether this entry renders for the given role. Home is the only entry
    /// everyone sees.
    pub fn visible_for(self, role: Role) -> bool {
        match self {
            Self::Home => true,
            Self::Clients | Self::Orders | Self::Vehicles | Self::Drivers | Self::Addresses => {
                role.is_admin() || role.is_operator()
            }
            Self::Map | Self::Reports | Self::Roles | Self::Users | Self::Audit => role.is_admin(),
        }
    }
}

/// The menu entries visible to a role, in display order.
pub fn menu_for(role: Role) -> Vec<MenuEntry> {
    MenuEntry::ALL
        .into_iter()
        .filter(|entry| entry.visible_for(role))
        .collect()
}
