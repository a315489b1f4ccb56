//! Network planner
//!
//! Emits the private network, any declared extra networks, and the port
//! forwards. Default forwards come first and are suppressed per guest port
//! when the user declares the same guest port; user forwards always follow
//! as their own directives so the host sees the user's host port and
//! protocol.

use crate::plan::directive::Directive;
use crate::plan::normalize::NormalizedSettings;

/// Fixed default forwards, in emission order
pub const DEFAULT_PORTS: [(u16, u16); 4] = [(80, 8000), (443, 44300), (3306, 33060), (5432, 54320)];

pub fn plan(settings: &NormalizedSettings) -> Vec<Directive> {
    let mut out = vec![Directive::Network {
        kind: "private_network".to_string(),
        ip: settings.ip.clone(),
        bridge: None,
    }];

    for network in &settings.networks {
        out.push(Directive::Network {
            kind: network.kind.clone(),
            ip: network.ip.clone(),
            bridge: network.bridge.clone(),
        });
    }

    // Matching is by guest port only; a user entry suppresses the default
    // even when its host port or protocol differ
    for (guest, host) in DEFAULT_PORTS {
        if !settings.ports.iter().any(|p| p.guest == guest) {
            out.push(Directive::ForwardedPort {
                guest,
                host,
                protocol: "tcp".to_string(),
                auto_correct: true,
            });
        }
    }

    for port in &settings.ports {
        out.push(Directive::ForwardedPort {
            guest: port.guest,
            host: port.host,
            protocol: port.protocol.clone(),
            auto_correct: true,
        });
    }

    out
}
