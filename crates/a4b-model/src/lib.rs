#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]

pub mod domain;
pub mod enums;
mod error;
mod fmt;
mod idempotency;
pub mod operations;

// Re-export everything at the crate root for convenience
pub use domain::{
    AddressBook, AddressBookData, Audio, BusinessReport, BusinessReportContentRange,
    BusinessReportRecurrence, BusinessReportS3Location, BusinessReportSchedule, Category,
    ConferencePreference, ConferenceProvider, Contact, ContactData, Content, DeveloperInfo,
    Device, DeviceData, DeviceEvent, DeviceNetworkProfileInfo, DeviceStatusDetail,
    DeviceStatusInfo, EndOfMeetingReminder, Filter, Gateway, GatewayGroup, GatewayGroupSummary,
    GatewaySummary, InstantBooking, IpDialIn, MeetingRoomConfiguration, MeetingSetting,
    NetworkProfile, NetworkProfileData, PhoneNumber, Profile, ProfileData, PstnDialIn,
    RequireCheckIn, Room, RoomData, RoomSkillParameter, SipAddress, SkillDetails, SkillGroup,
    SkillGroupData, SkillSummary, SkillsStoreSkill, SmartHomeAppliance, Sort, Ssml, Tag, Text,
    UserData,
};
pub use enums::{
    BusinessReportFailureCode, BusinessReportFormat, BusinessReportInterval, BusinessReportStatus,
    CommsProtocol, ConferenceProviderType, ConnectionStatus, DeviceEventType, DeviceStatus,
    DeviceStatusDetailCode, DistanceUnit, EnablementType, EndOfMeetingReminderType,
    EnrollmentStatus, Feature, Locale, NetworkEapMethod, NetworkSecurityType, PhoneNumberType,
    RequirePin, SipType, SkillType, SkillTypeFilter, SortValue, TemperatureUnit, WakeWord,
};
pub use error::{ModelError, ModelResult};
pub use idempotency::new_client_request_token;
pub use operations::{
    AssociateContactWithAddressBookRequest, AssociateContactWithAddressBookResponse,
    AssociateDeviceWithRoomRequest, AssociateDeviceWithRoomResponse,
    AssociateSkillGroupWithRoomRequest, AssociateSkillGroupWithRoomResponse,
    AssociateSkillWithSkillGroupRequest, AssociateSkillWithSkillGroupResponse,
    CreateAddressBookRequest, CreateAddressBookResponse, CreateBusinessReportScheduleRequest,
    CreateBusinessReportScheduleResponse, CreateConferenceProviderRequest,
    CreateConferenceProviderResponse, CreateContactRequest, CreateContactResponse,
    CreateGatewayGroupRequest, CreateGatewayGroupResponse, CreateNetworkProfileRequest,
    CreateNetworkProfileResponse, CreateProfileRequest, CreateProfileResponse, CreateRoomRequest,
    CreateRoomResponse, CreateSkillGroupRequest, CreateSkillGroupResponse, CreateUserRequest,
    CreateUserResponse, DeleteBusinessReportScheduleRequest, DeleteBusinessReportScheduleResponse,
    DeleteContactRequest, DeleteContactResponse, DeleteProfileRequest, DeleteProfileResponse,
    DeleteRoomRequest, DeleteRoomResponse, ForgetSmartHomeAppliancesRequest,
    ForgetSmartHomeAppliancesResponse, GetAddressBookRequest, GetAddressBookResponse,
    GetConferencePreferenceRequest, GetConferencePreferenceResponse, GetConferenceProviderRequest,
    GetConferenceProviderResponse, GetContactRequest, GetContactResponse, GetDeviceRequest,
    GetDeviceResponse, GetGatewayGroupRequest, GetGatewayGroupResponse, GetGatewayRequest,
    GetGatewayResponse, GetNetworkProfileRequest, GetNetworkProfileResponse, GetProfileRequest,
    GetProfileResponse, GetRoomRequest, GetRoomResponse, GetRoomSkillParameterRequest,
    GetRoomSkillParameterResponse, GetSkillGroupRequest, GetSkillGroupResponse,
    ListBusinessReportSchedulesRequest, ListBusinessReportSchedulesResponse,
    ListConferenceProvidersRequest, ListConferenceProvidersResponse, ListDeviceEventsRequest,
    ListDeviceEventsResponse, ListGatewayGroupsRequest, ListGatewayGroupsResponse,
    ListGatewaysRequest, ListGatewaysResponse, ListSkillsRequest, ListSkillsResponse,
    ListSkillsStoreCategoriesRequest, ListSkillsStoreCategoriesResponse,
    ListSkillsStoreSkillsByCategoryRequest, ListSkillsStoreSkillsByCategoryResponse,
    ListSmartHomeAppliancesRequest, ListSmartHomeAppliancesResponse, ListTagsRequest,
    ListTagsResponse,
    PutConferencePreferenceRequest, PutConferencePreferenceResponse,
    PutRoomSkillParameterRequest, PutRoomSkillParameterResponse, ResolveRoomRequest,
    ResolveRoomResponse, SearchAddressBooksRequest, SearchAddressBooksResponse,
    SearchContactsRequest, SearchContactsResponse, SearchDevicesRequest, SearchDevicesResponse,
    SearchNetworkProfilesRequest, SearchNetworkProfilesResponse, SearchProfilesRequest,
    SearchProfilesResponse, SearchRoomsRequest, SearchRoomsResponse, SearchUsersRequest,
    SearchUsersResponse, SendAnnouncementRequest, SendAnnouncementResponse, SendInvitationRequest,
    SendInvitationResponse, StartDeviceSyncRequest, StartDeviceSyncResponse, TagResourceRequest,
    TagResourceResponse, UntagResourceRequest, UntagResourceResponse, UpdateRoomRequest,
    UpdateRoomResponse,
};
