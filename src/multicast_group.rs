// This module implements the client side of the multicast-group
// service: group CRUD, device/gateway membership and the downlink
// queue.

use tonic::{transport, Status};
use tracing::info;

use crate::api::{
    multicast_group_service_client::MulticastGroupServiceClient,
    AddDeviceToMulticastGroupRequest, AddGatewayToMulticastGroupRequest,
    CreateMulticastGroupRequest, DeleteMulticastGroupRequest,
    EnqueueMulticastGroupQueueItemRequest, FlushMulticastGroupQueueRequest,
    GetMulticastGroupRequest, GetMulticastGroupResponse,
    ListMulticastGroupQueueRequest, ListMulticastGroupsRequest,
    ListMulticastGroupsResponse, MulticastGroup, MulticastGroupQueueItem,
    RemoveDeviceFromMulticastGroupRequest,
    RemoveGatewayFromMulticastGroupRequest,
};
use crate::auth;

// Local helper function to get a connection to the gRPC service.

async fn get_client(
) -> Result<MulticastGroupServiceClient<transport::Channel>, Status> {
    MulticastGroupServiceClient::connect(crate::endpoint())
        .await
        .map_err(|_| Status::unavailable("multicast-group service unavailable"))
}

pub async fn create(
    multicast_group: MulticastGroup, token: Option<&str>,
) -> Result<String, Status> {
    info!("creating multicast group \"{}\"", &multicast_group.name);

    let req = CreateMulticastGroupRequest {
        multicast_group: Some(multicast_group),
    };

    get_client()
        .await?
        .create(auth::with_token(req, token))
        .await
        .map(|v| v.into_inner().id)
}

pub async fn get(
    id: String, token: Option<&str>,
) -> Result<GetMulticastGroupResponse, Status> {
    let req = GetMulticastGroupRequest { id };

    get_client()
        .await?
        .get(auth::with_token(req, token))
        .await
        .map(|v| v.into_inner())
}

pub async fn delete(id: String, token: Option<&str>) -> Result<(), Status> {
    info!("deleting multicast group {}", &id);

    let req = DeleteMulticastGroupRequest { id };

    get_client()
        .await?
        .delete(auth::with_token(req, token))
        .await
        .map(|_| ())
}

pub async fn list(
    application_id: String, limit: u32, offset: u32, search: String,
    token: Option<&str>,
) -> Result<ListMulticastGroupsResponse, Status> {
    let req = ListMulticastGroupsRequest {
        limit,
        offset,
        search,
        application_id,
    };

    get_client()
        .await?
        .list(auth::with_token(req, token))
        .await
        .map(|v| v.into_inner())
}

pub async fn add_device(
    multicast_group_id: String, dev_eui: String, token: Option<&str>,
) -> Result<(), Status> {
    let req = AddDeviceToMulticastGroupRequest {
        multicast_group_id,
        dev_eui,
    };

    get_client()
        .await?
        .add_device(auth::with_token(req, token))
        .await
        .map(|_| ())
}

pub async fn remove_device(
    multicast_group_id: String, dev_eui: String, token: Option<&str>,
) -> Result<(), Status> {
    let req = RemoveDeviceFromMulticastGroupRequest {
        multicast_group_id,
        dev_eui,
    };

    get_client()
        .await?
        .remove_device(auth::with_token(req, token))
        .await
        .map(|_| ())
}

pub async fn add_gateway(
    multicast_group_id: String, gateway_id: String, token: Option<&str>,
) -> Result<(), Status> {
    let req = AddGatewayToMulticastGroupRequest {
        multicast_group_id,
        gateway_id,
    };

    get_client()
        .await?
        .add_gateway(auth::with_token(req, token))
        .await
        .map(|_| ())
}

pub async fn remove_gateway(
    multicast_group_id: String, gateway_id: String, token: Option<&str>,
) -> Result<(), Status> {
    let req = RemoveGatewayFromMulticastGroupRequest {
        multicast_group_id,
        gateway_id,
    };

    get_client()
        .await?
        .remove_gateway(auth::with_token(req, token))
        .await
        .map(|_| ())
}

// Enqueues one downlink payload. The frame-counter is assigned by the
// server and returned.

pub async fn enqueue(
    queue_item: MulticastGroupQueueItem, token: Option<&str>,
) -> Result<u32, Status> {
    info!(
        "enqueueing {} byte(s) on multicast group {}",
        queue_item.data.len(),
        &queue_item.multicast_group_id
    );

    let req = EnqueueMulticastGroupQueueItemRequest {
        queue_item: Some(queue_item),
    };

    get_client()
        .await?
        .enqueue(auth::with_token(req, token))
        .await
        .map(|v| v.into_inner().f_cnt)
}

pub async fn flush_queue(
    multicast_group_id: String, token: Option<&str>,
) -> Result<(), Status> {
    info!("flushing queue of multicast group {}", &multicast_group_id);

    let req = FlushMulticastGroupQueueRequest { multicast_group_id };

    get_client()
        .await?
        .flush_queue(auth::with_token(req, token))
        .await
        .map(|_| ())
}

pub async fn list_queue(
    multicast_group_id: String, token: Option<&str>,
) -> Result<Vec<MulticastGroupQueueItem>, Status> {
    let req = ListMulticastGroupQueueRequest { multicast_group_id };

    get_client()
        .await?
        .list_queue(auth::with_token(req, token))
        .await
        .map(|v| v.into_inner().items)
}
