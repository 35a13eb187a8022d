/// The utility grid connection: pricing and export capacity.
///
/// The export limit is a constant consulted by the dispatch strategy; it
/// is not enforced inside [`UtilityGrid::cost`].
#[derive(Debug, Clone)]
pub struct UtilityGrid {
    /// Maximum export power in kilowatts.
    pub export_limit_kw: f32,

    /// Price paid per kWh imported.
    pub import_price: f32,

    /// Price earned per kWh exported.
    pub export_price: f32,
}

impl UtilityGrid {
    /// Creates a new grid connection.
    pub fn new(export_limit_kw: f32, import_price: f32, export_price: f32) -> Self {
        Self {
            export_limit_kw: export_limit_kw.max(0.0),
            import_price,
            export_price,
        }
    }

    /// Net monetary cost of a step's grid exchange.
    ///
    /// Positive means net payment to the utility, negative means net
    /// earning.
    pub fn cost(&self, imported_kwh: f32, exported_kwh: f32) -> f32 {
        imported_kwh * self.import_price - exported_kwh * self.export_price
    }
}
