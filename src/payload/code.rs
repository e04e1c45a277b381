//! Semantic record codes and their display metadata.
//!
//! A [`RecordCode`] names a physical quantity independently of its wire
//! encoding; the same code may be encodable at several scales and widths
//! through different VIF bands.

use serde::{Deserialize, Serialize};

/// Identifies the physical quantity carried by a record.
///
/// Covers the primary VIF table plus the supported 0xFD and 0xFB VIFE
/// extension pages of EN 13757-3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordCode {
    // Primary VIF table
    EnergyWh,
    EnergyJ,
    VolumeM3,
    MassKg,
    OnTimeS,
    OnTimeMin,
    OnTimeH,
    OnTimeDays,
    OperatingTimeS,
    OperatingTimeMin,
    OperatingTimeH,
    OperatingTimeDays,
    PowerW,
    PowerJH,
    VolumeFlowM3H,
    VolumeFlowM3Min,
    VolumeFlowM3S,
    MassFlowKgH,
    FlowTemperatureC,
    ReturnTemperatureC,
    TemperatureDiffK,
    ExternalTemperatureC,
    PressureBar,
    TimePointDate,
    TimePointDateTime,
    AvgDurationS,
    AvgDurationMin,
    AvgDurationH,
    AvgDurationDays,
    ActualDurationS,
    ActualDurationMin,
    ActualDurationH,
    ActualDurationDays,
    FabricationNumber,
    BusAddress,

    // VIFE page 0xFD
    Credit,
    Debit,
    AccessNumber,
    Manufacturer,
    ModelVersion,
    HardwareVersion,
    FirmwareVersion,
    Customer,
    ErrorFlags,
    ErrorMask,
    DigitalOutput,
    DigitalInput,
    BaudrateBps,
    ResponseDelayTime,
    Retry,
    Generic,
    Volts,
    Amperes,
    ResetCounter,
    CumulationCounter,

    // VIFE page 0xFB
    VolumeFt3,
    VolumeGal,
    VolumeFlowGalMin,
    VolumeFlowGalH,
    FlowTemperatureF,
    ReturnTemperatureF,
    TemperatureDiffF,
    ExternalTemperatureF,
    TemperatureLimitF,
    TemperatureLimitC,
    MaxPowerW,

    // VIFE page 0xFC (catch-all, not decoded further)
    UnsupportedExt,
}

/// Returns the display unit for a record code, or `""` when the quantity
/// is dimensionless or has no registered unit.
pub fn units_for(code: RecordCode) -> &'static str {
    use RecordCode::*;
    match code {
        EnergyWh => "Wh",
        EnergyJ => "J",
        VolumeM3 => "m3",
        MassKg => "kg",
        OnTimeS | OperatingTimeS | AvgDurationS | ActualDurationS => "s",
        OnTimeMin | OperatingTimeMin | AvgDurationMin | ActualDurationMin => "min",
        OnTimeH | OperatingTimeH | AvgDurationH | ActualDurationH => "h",
        OnTimeDays | OperatingTimeDays | AvgDurationDays | ActualDurationDays => "days",
        PowerW | MaxPowerW => "W",
        PowerJH => "J/h",
        VolumeFlowM3H => "m3/h",
        VolumeFlowM3Min => "m3/min",
        VolumeFlowM3S => "m3/s",
        MassFlowKgH => "kg/h",
        FlowTemperatureC | ReturnTemperatureC | ExternalTemperatureC | TemperatureLimitC => "C",
        TemperatureDiffK => "K",
        PressureBar => "bar",
        TimePointDate => "Date_JJMMDD",
        TimePointDateTime => "Time_JJMMDDhhmm",
        BaudrateBps => "bps",
        Volts => "V",
        Amperes => "A",
        VolumeFt3 => "ft3",
        VolumeGal => "gal",
        VolumeFlowGalMin => "gal/min",
        VolumeFlowGalH => "gal/h",
        FlowTemperatureF | ReturnTemperatureF | TemperatureDiffF | ExternalTemperatureF
        | TemperatureLimitF => "F",
        UnsupportedExt => "X",
        _ => "",
    }
}

/// Returns the display name for a record code, or `""` when none is
/// registered.
pub fn name_for(code: RecordCode) -> &'static str {
    use RecordCode::*;
    match code {
        EnergyWh | EnergyJ => "energy",
        VolumeM3 | VolumeFt3 | VolumeGal => "volume",
        MassKg => "mass",
        OnTimeS | OnTimeMin | OnTimeH | OnTimeDays => "on_time",
        OperatingTimeS | OperatingTimeMin | OperatingTimeH | OperatingTimeDays => "operating_time",
        AvgDurationS | AvgDurationMin | AvgDurationH | AvgDurationDays => "avg_duration",
        ActualDurationS | ActualDurationMin | ActualDurationH | ActualDurationDays => {
            "actual_duration"
        }
        PowerW | MaxPowerW | PowerJH => "power",
        VolumeFlowM3H | VolumeFlowM3Min | VolumeFlowM3S | VolumeFlowGalMin | VolumeFlowGalH => {
            "volume_flow"
        }
        MassFlowKgH => "mass_flow",
        FlowTemperatureC | FlowTemperatureF => "flow_temperature",
        ReturnTemperatureC | ReturnTemperatureF => "return_temperature",
        ExternalTemperatureC | ExternalTemperatureF => "external_temperature",
        TemperatureLimitC | TemperatureLimitF => "temperature_limit",
        TemperatureDiffK | TemperatureDiffF => "temperature_diff",
        PressureBar => "pressure",
        TimePointDate | TimePointDateTime => "time_point",
        BaudrateBps => "baudrate",
        Volts => "voltage",
        Amperes => "current",
        FabricationNumber => "fab_number",
        BusAddress => "bus_address",
        Credit => "credit",
        Debit => "debit",
        AccessNumber => "access_number",
        Manufacturer => "manufacturer",
        ModelVersion => "model_version",
        HardwareVersion => "hardware_version",
        FirmwareVersion => "firmware_version",
        Customer => "customer",
        ErrorFlags => "error_flags",
        ErrorMask => "error_mask",
        DigitalOutput => "digital_output",
        DigitalInput => "digital_input",
        ResponseDelayTime => "response_delay",
        Retry => "retry",
        Generic => "generic",
        ResetCounter | CumulationCounter => "counter",
        UnsupportedExt => "unsupported",
    }
}
