//! Static VIF band table and lookup functions.
//!
//! Each [`VifDef`] maps a contiguous band of raw VIF values
//! `[base, base + range)` to a record code; the offset of a VIF within its
//! band perturbs the band's base scalar by one decimal order of magnitude
//! per step. Bands must not overlap in raw VIF space, so the first match
//! of a linear scan is also the only match.

use crate::payload::code::RecordCode;

/// One contiguous band of raw VIF values sharing a record code.
#[derive(Debug, Clone, Copy)]
pub struct VifDef {
    pub code: RecordCode,
    /// First raw VIF value of the band (up to 3 bytes of VIF/VIFE chain).
    pub base: u32,
    /// Number of consecutive VIF values covered.
    pub range: u8,
    /// Decimal exponent at the band base.
    pub scalar: i8,
}

const fn def(code: RecordCode, base: u32, range: u8, scalar: i8) -> VifDef {
    VifDef {
        code,
        base,
        range,
        scalar,
    }
}

use RecordCode::*;

/// The supported subset of EN 13757-3 VIF and VIFE codes.
pub const VIF_DEFS: &[VifDef] = &[
    // Primary VIF table
    def(EnergyWh, 0x00, 8, -3),
    def(EnergyJ, 0x08, 8, 0),
    def(VolumeM3, 0x10, 8, -6),
    def(MassKg, 0x18, 8, -3),
    def(OnTimeS, 0x20, 1, 0),
    def(OnTimeMin, 0x21, 1, 0),
    def(OnTimeH, 0x22, 1, 0),
    def(OnTimeDays, 0x23, 1, 0),
    def(OperatingTimeS, 0x24, 1, 0),
    def(OperatingTimeMin, 0x25, 1, 0),
    def(OperatingTimeH, 0x26, 1, 0),
    def(OperatingTimeDays, 0x27, 1, 0),
    def(PowerW, 0x28, 8, -3),
    def(PowerJH, 0x30, 8, 0),
    def(VolumeFlowM3H, 0x38, 8, -6),
    def(VolumeFlowM3Min, 0x40, 8, -7),
    def(VolumeFlowM3S, 0x48, 8, -9),
    def(MassFlowKgH, 0x50, 8, -3),
    def(FlowTemperatureC, 0x58, 4, -3),
    def(ReturnTemperatureC, 0x5C, 4, -3),
    def(TemperatureDiffK, 0x60, 4, -3),
    def(ExternalTemperatureC, 0x64, 4, -3),
    def(PressureBar, 0x68, 4, -3),
    def(TimePointDate, 0x6C, 1, 0),
    def(TimePointDateTime, 0x6D, 1, 0),
    def(AvgDurationS, 0x70, 1, 0),
    def(AvgDurationMin, 0x71, 1, 0),
    def(AvgDurationH, 0x72, 1, 0),
    def(AvgDurationDays, 0x73, 1, 0),
    def(ActualDurationS, 0x74, 1, 0),
    def(ActualDurationMin, 0x75, 1, 0),
    def(ActualDurationH, 0x76, 1, 0),
    def(ActualDurationDays, 0x77, 1, 0),
    def(FabricationNumber, 0x78, 1, 0),
    def(BusAddress, 0x7A, 1, 0),
    // VIFE page 0xFD
    def(Credit, 0xFD00, 4, -3),
    def(Debit, 0xFD04, 4, -3),
    def(AccessNumber, 0xFD08, 1, 0),
    def(Manufacturer, 0xFD0A, 1, 0),
    def(ModelVersion, 0xFD0C, 1, 0),
    def(HardwareVersion, 0xFD0D, 1, 0),
    def(FirmwareVersion, 0xFD0E, 1, 0),
    def(Customer, 0xFD11, 1, 0),
    def(ErrorFlags, 0xFD17, 1, 0),
    def(ErrorMask, 0xFD18, 1, 0),
    def(DigitalOutput, 0xFD1A, 1, 0),
    def(DigitalInput, 0xFD1B, 1, 0),
    def(BaudrateBps, 0xFD1C, 1, 0),
    def(ResponseDelayTime, 0xFD1D, 1, 0),
    def(Retry, 0xFD1E, 1, 0),
    def(Generic, 0xFD3C, 1, 0),
    def(Volts, 0xFD40, 16, -9),
    def(Amperes, 0xFD50, 16, -12),
    def(ResetCounter, 0xFD60, 1, 0),
    def(CumulationCounter, 0xFD61, 1, 0),
    // VIFE page 0xFB
    def(EnergyWh, 0xFB00, 2, 5),
    def(EnergyJ, 0xFB08, 2, 8),
    def(VolumeM3, 0xFB10, 2, 2),
    def(MassKg, 0xFB18, 2, 5),
    def(VolumeFt3, 0xFB21, 1, -1),
    def(VolumeGal, 0xFB22, 2, -1),
    def(VolumeFlowGalMin, 0xFB24, 1, -3),
    def(VolumeFlowGalMin, 0xFB25, 1, 0),
    def(VolumeFlowGalH, 0xFB26, 1, 0),
    def(PowerW, 0xFB28, 2, 5),
    def(PowerJH, 0xFB30, 2, 8),
    def(FlowTemperatureF, 0xFB58, 4, -3),
    def(ReturnTemperatureF, 0xFB5C, 4, -3),
    def(TemperatureDiffF, 0xFB60, 4, -3),
    def(ExternalTemperatureF, 0xFB64, 4, -3),
    def(TemperatureLimitF, 0xFB70, 4, -3),
    def(TemperatureLimitC, 0xFB74, 4, -3),
    def(MaxPowerW, 0xFB78, 8, -3),
    // VIFE page 0xFC (whole page, kept opaque)
    def(UnsupportedExt, 0xFC00, 0x80, 0),
];

/// Finds the definition whose band contains `vif`.
///
/// Bands are disjoint, so the first match of the scan is the only one.
pub fn find_definition(vif: u32) -> Option<&'static VifDef> {
    VIF_DEFS
        .iter()
        .find(|d| d.base <= vif && vif < d.base + u32::from(d.range))
}

/// Resolves a `(code, scalar)` pair to the raw VIF encoding it.
///
/// When several bands carry the same code (metric vs. imperial variants),
/// the first band in table order whose scalar range contains `scalar`
/// wins.
pub fn vif_for_code(code: RecordCode, scalar: i8) -> Option<u32> {
    VIF_DEFS.iter().find_map(|d| {
        let lo = i32::from(d.scalar);
        let hi = lo + i32::from(d.range);
        if d.code == code && lo <= i32::from(scalar) && i32::from(scalar) < hi {
            Some(d.base + (i32::from(scalar) - lo) as u32)
        } else {
            None
        }
    })
}
