//! Shared wire model shapes.
//!
//! One module per resource family. Shapes the service produces (`Room`,
//! `Device`, the `*Data` search projections) are plain structs populated by
//! a deserializer; shapes callers embed in requests (`Tag`, `IpDialIn`,
//! `MeetingRoomConfiguration`, announcement content) additionally carry
//! constructors and consuming `with_` builders.

mod address_book;
mod announcement;
mod conference;
mod contact;
mod device;
mod gateway;
mod network_profile;
mod profile;
mod report;
mod room;
mod skill;
mod smart_home;
mod tag;
mod user;

pub use address_book::{AddressBook, AddressBookData};
pub use announcement::{Audio, Content, Ssml, Text};
pub use conference::{
    ConferencePreference, ConferenceProvider, IpDialIn, MeetingSetting, PstnDialIn,
};
pub use contact::{Contact, ContactData, PhoneNumber, SipAddress};
pub use device::{
    Device, DeviceData, DeviceEvent, DeviceNetworkProfileInfo, DeviceStatusDetail,
    DeviceStatusInfo,
};
pub use gateway::{Gateway, GatewayGroup, GatewayGroupSummary, GatewaySummary};
pub use network_profile::{NetworkProfile, NetworkProfileData};
pub use profile::{
    EndOfMeetingReminder, InstantBooking, MeetingRoomConfiguration, Profile, ProfileData,
    RequireCheckIn,
};
pub use report::{
    BusinessReport, BusinessReportContentRange, BusinessReportRecurrence,
    BusinessReportS3Location, BusinessReportSchedule,
};
pub use room::{Room, RoomData, RoomSkillParameter};
pub use skill::{
    Category, DeveloperInfo, SkillDetails, SkillGroup, SkillGroupData, SkillSummary,
    SkillsStoreSkill,
};
pub use smart_home::SmartHomeAppliance;
pub use tag::{Filter, Sort, Tag};
pub use user::UserData;
