//! Request and response shapes, one module per resource family.
//!
//! Requests are caller-built and carry the fluent `with_` surface;
//! responses are plain structs a deserializer populates. Operations that
//! return nothing still have a response type so every call site handles the
//! same shape.

mod address_books;
mod announcements;
mod conference;
mod contacts;
mod devices;
mod gateways;
mod network_profiles;
mod profiles;
mod reports;
mod rooms;
mod skills;
mod smart_home;
mod tags;
mod users;

pub use address_books::{
    AssociateContactWithAddressBookRequest, AssociateContactWithAddressBookResponse,
    CreateAddressBookRequest, CreateAddressBookResponse, GetAddressBookRequest,
    GetAddressBookResponse, SearchAddressBooksRequest, SearchAddressBooksResponse,
};
pub use announcements::{SendAnnouncementRequest, SendAnnouncementResponse};
pub use conference::{
    CreateConferenceProviderRequest, CreateConferenceProviderResponse,
    GetConferencePreferenceRequest, GetConferencePreferenceResponse,
    GetConferenceProviderRequest, GetConferenceProviderResponse, ListConferenceProvidersRequest,
    ListConferenceProvidersResponse, PutConferencePreferenceRequest,
    PutConferencePreferenceResponse,
};
pub use contacts::{
    CreateContactRequest, CreateContactResponse, DeleteContactRequest, DeleteContactResponse,
    GetContactRequest, GetContactResponse, SearchContactsRequest, SearchContactsResponse,
};
pub use devices::{
    AssociateDeviceWithRoomRequest, AssociateDeviceWithRoomResponse, GetDeviceRequest,
    GetDeviceResponse, ListDeviceEventsRequest, ListDeviceEventsResponse, SearchDevicesRequest,
    SearchDevicesResponse, StartDeviceSyncRequest, StartDeviceSyncResponse,
};
pub use gateways::{
    CreateGatewayGroupRequest, CreateGatewayGroupResponse, GetGatewayGroupRequest,
    GetGatewayGroupResponse, GetGatewayRequest, GetGatewayResponse, ListGatewayGroupsRequest,
    ListGatewayGroupsResponse, ListGatewaysRequest, ListGatewaysResponse,
};
pub use network_profiles::{
    CreateNetworkProfileRequest, CreateNetworkProfileResponse, GetNetworkProfileRequest,
    GetNetworkProfileResponse, SearchNetworkProfilesRequest, SearchNetworkProfilesResponse,
};
pub use profiles::{
    CreateProfileRequest, CreateProfileResponse, DeleteProfileRequest, DeleteProfileResponse,
    GetProfileRequest, GetProfileResponse, SearchProfilesRequest, SearchProfilesResponse,
};
pub use reports::{
    CreateBusinessReportScheduleRequest, CreateBusinessReportScheduleResponse,
    DeleteBusinessReportScheduleRequest, DeleteBusinessReportScheduleResponse,
    ListBusinessReportSchedulesRequest, ListBusinessReportSchedulesResponse,
};
pub use rooms::{
    CreateRoomRequest, CreateRoomResponse, DeleteRoomRequest, DeleteRoomResponse,
    GetRoomRequest, GetRoomResponse, GetRoomSkillParameterRequest, GetRoomSkillParameterResponse,
    PutRoomSkillParameterRequest, PutRoomSkillParameterResponse, ResolveRoomRequest,
    ResolveRoomResponse, SearchRoomsRequest, SearchRoomsResponse, UpdateRoomRequest,
    UpdateRoomResponse,
};
pub use skills::{
    AssociateSkillGroupWithRoomRequest, AssociateSkillGroupWithRoomResponse,
    AssociateSkillWithSkillGroupRequest, AssociateSkillWithSkillGroupResponse,
    CreateSkillGroupRequest, CreateSkillGroupResponse, GetSkillGroupRequest,
    GetSkillGroupResponse, ListSkillsRequest, ListSkillsResponse,
    ListSkillsStoreCategoriesRequest, ListSkillsStoreCategoriesResponse,
    ListSkillsStoreSkillsByCategoryRequest, ListSkillsStoreSkillsByCategoryResponse,
};
pub use smart_home::{
    ForgetSmartHomeAppliancesRequest, ForgetSmartHomeAppliancesResponse,
    ListSmartHomeAppliancesRequest, ListSmartHomeAppliancesResponse,
};
pub use tags::{
    ListTagsRequest, ListTagsResponse, TagResourceRequest, TagResourceResponse,
    UntagResourceRequest, UntagResourceResponse,
};
pub use users::{
    CreateUserRequest, CreateUserResponse, SearchUsersRequest, SearchUsersResponse,
    SendInvitationRequest, SendInvitationResponse,
};
