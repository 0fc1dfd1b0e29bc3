/// Equipment catalog offered by the intake form's multi-select.
///
/// Presence validation does not check submissions against this list; it only
/// drives what the form renders.
pub const EQUIPMENT: &[&str] = &[
    "Backhoe",
    "Boom Lift",
    "Bulldozer",
    "Compactor",
    "Crane",
    "Dump Truck",
    "Excavator",
    "Forklift",
    "Generator",
    "Mini Excavator",
    "Scissor Lift",
    "Skid Steer",
    "Telehandler",
    "Trencher",
    "Water Truck",
];
