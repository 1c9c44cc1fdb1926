// ============================================================================
// POLITIQUE D'AUTORISATION
// ============================================================================
//
// Prédicats purs (caller, ressource) -> Ok(()) ou AppError.
// Aucun accès BD ici: les services chargent la ressource puis appellent
// la règle correspondante avant toute écriture.
//
// Règles:
//   - Upload vidéo       : creator ou admin
//   - Suppression vidéo  : uploader ou admin
//   - Édition commentaire: auteur uniquement
//   - Suppression comm.  : auteur ou admin
//   - Abonnement         : pas à soi-même
//   - Like / watch later : tout user authentifié (pas de règle)
//
// ============================================================================

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::models::users::Role;
use crate::models::{comments, videos};

fn is_admin(caller: &AuthUser) -> bool {
    caller.role == Role::Admin
}

pub fn can_upload_video(caller: &AuthUser) -> AppResult<()> {
    match caller.role {
        Role::Creator | Role::Admin => Ok(()),
        Role::Viewer => Err(AppError::Forbidden(
            "Only creators or admins can upload videos".to_string(),
        )),
    }
}

pub fn can_delete_video(caller: &AuthUser, video: &videos::Model) -> AppResult<()> {
    if is_admin(caller) || video.uploader_id == caller.user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden("You cannot delete this video".to_string()))
    }
}

pub fn can_edit_comment(caller: &AuthUser, comment: &comments::Model) -> AppResult<()> {
    if comment.user_id == caller.user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You can only edit your own comments".to_string(),
        ))
    }
}

pub fn can_delete_comment(caller: &AuthUser, comment: &comments::Model) -> AppResult<()> {
    if is_admin(caller) || comment.user_id == caller.user_id {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "Not authorized to delete this comment".to_string(),
        ))
    }
}

pub fn can_subscribe(caller: &AuthUser, target_id: i32) -> AppResult<()> {
    if caller.user_id == target_id {
        Err(AppError::BadRequest(
            "You cannot subscribe to yourself".to_string(),
        ))
    } else {
        Ok(())
    }
}
