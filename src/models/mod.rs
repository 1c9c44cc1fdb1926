// ============================================================================
// MODELS - MODULE PRINCIPAL
// ============================================================================
//
// Description:
//   Point d'entrée pour tous les modèles de données.
//   Chaque modèle correspond à une table avec SeaORM.
//
// Liste des modules:
//   - users : Utilisateurs (username/email uniques, rôle admin/creator/viewer)
//   - videos : Métadonnées des vidéos, appartiennent à un uploader
//   - comments : Commentaires d'un user sur une vidéo
//   - likes : Arêtes user <-> video (toggle)
//   - watch_later : Arêtes user <-> video (toggle)
//   - subscriptions : Arêtes user <-> user (abonnements)
//   - dto : Data Transfer Objects pour les requêtes/réponses API
//
// Points d'attention:
//   - Toutes les clés étrangères sont ON DELETE CASCADE
//   - Les tables d'arêtes ont une clé primaire composite (pas d'id)
//
// ============================================================================

pub mod comments;
pub mod dto;
pub mod likes;
pub mod subscriptions;
pub mod users;
pub mod videos;
pub mod watch_later;
