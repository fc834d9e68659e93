pub mod engine;
pub mod failed_logins;
pub mod finding;
pub mod firewall_blocks;
pub mod geo_location;
pub mod rule;

use engine::AnomalyEngine;
use failed_logins::RepeatedFailedLogins;
use firewall_blocks::ExcessiveFirewallBlocks;
use geo_location::GeoLocationAnomaly;

/// Create the default detection engine
///
/// Rule order is fixed and findings concatenate in this order.
pub fn create_default_engine() -> AnomalyEngine {
    AnomalyEngine::new()
        .add_rule(Box::new(RepeatedFailedLogins)) // 3+ failures within 10 minutes per user/IP
        .add_rule(Box::new(ExcessiveFirewallBlocks)) // >= 5 lifetime blocks per IP
        .add_rule(Box::new(GeoLocationAnomaly)) // events from Unknown locations
}
