//! Accepted header spellings per logical field
//!
//! Order matters: earlier spellings win when a row carries several.

/// A logical field read from raw rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalField {
    // Explicit coordinates
    Latitude,
    Longitude,
    VehicleLatitude,
    VehicleLongitude,

    // Vehicle rows
    VehicleState,
    VehicleCity,
    VehicleZip,
    DealStatus,
    InvPrepStatus,
    DealCompletion,
    UnitType,
    ModelYear,
    Model,
    Vin,
    GpsFix,
    GpsFixReason,
    GpsMoving,
    Moving,
    MovingCalc,
    PtStatus,
    PtSerial,
    EncoreSerial,
    PtLastRead,
    DaysStationary,
    CustomerId,
    PaymentSchedule,

    // Installer rows
    InstallerCompany,
    InstallerState,
    InstallerCity,
    InstallerZip,
    InstallerEmail,
    InstallerPhone,

    // Partner rows
    PartnerCompany,
    PartnerState,
    PartnerRegion,
    PartnerCity,
    PartnerZip,
    PartnerPhone,
    PartnerContact,
    PartnerAvailability,
    PartnerAuthorization,
    PartnerNotes,
}

impl LogicalField {
    pub fn synonyms(&self) -> &'static [&'static str] {
        use LogicalField::*;
        match self {
            Latitude => crate::constants::LATITUDE_KEYS,
            Longitude => crate::constants::LONGITUDE_KEYS,
            VehicleLatitude => &["Lat", "lat"],
            VehicleLongitude => &["Long", "Lng", "long", "lng"],

            VehicleState => &["State Loc", "State", "state", "state_code"],
            VehicleCity => &["PT City", "City", "city"],
            VehicleZip => &["PT ZipCode", "Zip", "zip"],
            DealStatus => &["Deal Status", "status"],
            InvPrepStatus => &["INV Prep Stat", "Inv. Prep. Stat.", "Inv Prep Stat"],
            DealCompletion => &[
                "Deal Completion",
                "Deal completion",
                "Deal completition",
                "Remaining",
            ],
            UnitType => &["Unit Type", "type"],
            ModelYear => &["Model Year", "year"],
            Model => &["Model", "model"],
            Vin => &["ShortVIN", "VIN", "vin"],
            GpsFix => &["GPS Fix", "gps_fix"],
            GpsFixReason => &["GPS Fix Reason", "gps_fix_reason"],
            GpsMoving => &["GPS Moving", "gps_moving"],
            Moving => &["Moving", "moving"],
            MovingCalc => &["Moving (Calc)", "moving_calc"],
            PtStatus => &["PT Status", "pt_status"],
            PtSerial => &["PT Serial ", "PT Serial", "pt_serial"],
            EncoreSerial => &["Encore Serial", "encore_serial"],
            PtLastRead => &["PT Last Read", "pt_last_read"],
            DaysStationary => &[
                "days_stationary",
                "Days Stationary",
                "Days stationary",
                "Days Stationary (Calc)",
                "Days Parked",
            ],
            CustomerId => &["Customer ID", "Customer", "customer_id"],
            PaymentSchedule => &["Payment Schedule", "payment"],

            InstallerCompany => &[
                "company_name",
                "Installation Company",
                "Company",
                "company",
                "name",
            ],
            InstallerState => &["State", "state", "state_code"],
            InstallerCity => &["City", "city"],
            InstallerZip => &["Zip", "zip"],
            InstallerEmail => &["Email", "email"],
            InstallerPhone => &["Phone", "phone"],

            PartnerCompany => &["company_name", "company", "Company", "name"],
            PartnerState => &["state", "region", "State", "Region", "state_code"],
            PartnerRegion => &["region", "Region", "state"],
            PartnerCity => &["city", "City"],
            PartnerZip => &["zip", "Zip", "zipcode", "postal_code"],
            PartnerPhone => &["phone", "Phone"],
            PartnerContact => &["contact", "Contact", "contact_name"],
            PartnerAvailability => &["availability", "tier", "Availability"],
            PartnerAuthorization => &["authorization", "Authorization"],
            PartnerNotes => &["notes", "Notes"],
        }
    }
}
